//! Integration tests for the data view controller.

use std::borrow::Cow;

use arp_core::{
    Collation, DataView, DescendingOrder, ViewError, ViewEvent, ViewOptions, paginate,
};
use arp_model::{
    ActionKind, FieldName, ModelError, Record, Row, RowId, Scalar, SortDirection, SortSpec,
};

fn numbered(count: i64) -> Vec<Row> {
    (1..=count)
        .map(|id| {
            Row::from_pairs([
                ("id", Scalar::from(id)),
                ("name", Scalar::from(format!("Student {id:02}"))),
            ])
            .unwrap()
        })
        .collect()
}

fn field(name: &str) -> FieldName {
    FieldName::new(name).unwrap()
}

fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|row| row.row_id().to_string()).collect()
}

#[test]
fn twenty_three_rows_paginate_into_three_pages() {
    let rows = numbered(23);
    let first = paginate(&rows, 10, 1).unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.rows.first().unwrap().row_id(), &RowId::from(1));
    assert_eq!(first.rows.last().unwrap().row_id(), &RowId::from(10));
    let third = paginate(&rows, 10, 3).unwrap();
    assert_eq!(third.rows.len(), 3);
    assert_eq!(third.rows[0].row_id(), &RowId::from(21));

    let mut view = DataView::from_rows(rows, ViewOptions::default()).unwrap();
    view.set_page(3).unwrap();
    let state = view.visible_state();
    assert_eq!(state.total, 23);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.current_page, 3);
    assert_eq!(ids(&state.page_rows), vec!["21", "22", "23"]);
    assert_eq!((state.first_row(), state.last_row()), (21, 23));
}

#[test]
fn query_matches_case_insensitively() {
    let rows = vec![
        Row::from_pairs([("id", Scalar::from(1)), ("name", "Priya".into())]).unwrap(),
        Row::from_pairs([("id", Scalar::from(2)), ("name", "kumar".into())]).unwrap(),
    ];
    let mut view = DataView::from_rows(rows, ViewOptions::default()).unwrap();
    view.set_query("PRI");
    let state = view.visible_state();
    assert_eq!(state.total, 1);
    assert_eq!(ids(&state.page_rows), vec!["1"]);
}

#[test]
fn sort_header_click_orders_case_insensitively_then_toggles() {
    let rows = vec![
        Row::from_pairs([("id", Scalar::from(1)), ("name", "banana".into())]).unwrap(),
        Row::from_pairs([("id", Scalar::from(2)), ("name", "Apple".into())]).unwrap(),
        Row::from_pairs([("id", Scalar::from(3)), ("name", "cherry".into())]).unwrap(),
    ];
    let mut view = DataView::from_rows(rows, ViewOptions::default()).unwrap();

    view.set_sort(field("name"));
    let state = view.visible_state();
    assert_eq!(ids(&state.page_rows), vec!["2", "1", "3"]);
    assert_eq!(state.sort_key, Some(field("name")));
    assert_eq!(state.sort_direction, Some(SortDirection::Asc));

    view.set_sort(field("name"));
    let state = view.visible_state();
    assert_eq!(ids(&state.page_rows), vec!["3", "1", "2"]);
    assert_eq!(state.sort_direction, Some(SortDirection::Desc));

    view.set_sort(field("id"));
    assert_eq!(
        view.sort_spec(),
        Some(&SortSpec::new(field("id"), SortDirection::Asc))
    );
}

#[test]
fn page_past_end_resolves_to_last_page() {
    let mut view = DataView::from_rows(numbered(35), ViewOptions::default()).unwrap();
    view.set_page(99).unwrap();
    assert_eq!(view.page_spec().number, 4);
    let state = view.visible_state();
    assert_eq!(state.current_page, 4);
    assert_eq!(state.page_rows.len(), 5);
}

#[test]
fn replacing_rows_drops_stale_selection() {
    let mut view = DataView::from_rows(numbered(8), ViewOptions::default()).unwrap();
    assert!(view.select_row(RowId::from(5)));
    assert_eq!(view.visible_state().selected_id, Some(RowId::from(5)));

    let without_five: Vec<Row> = numbered(8)
        .into_iter()
        .filter(|row| row.row_id() != &RowId::from(5))
        .collect();
    view.replace_rows(without_five).unwrap();
    assert_eq!(view.selection().current(), None);
    assert_eq!(view.visible_state().selected_id, None);
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut view = DataView::from_rows(numbered(40), ViewOptions::default()).unwrap();
    view.set_page(4).unwrap();
    assert_eq!(view.page_spec().number, 4);
    view.set_page_size(5).unwrap();
    assert_eq!(view.page_spec().number, 1);
    let state = view.visible_state();
    assert_eq!(state.total_pages, 8);
    assert_eq!(ids(&state.page_rows), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn query_and_sort_changes_reset_page() {
    let mut view = DataView::from_rows(numbered(30), ViewOptions::default()).unwrap();
    view.set_page(3).unwrap();
    view.set_query("student");
    assert_eq!(view.page_spec().number, 1);
    view.set_page(2).unwrap();
    view.set_sort(field("name"));
    assert_eq!(view.page_spec().number, 1);
}

#[test]
fn zero_page_size_and_number_are_invalid() {
    let mut view = DataView::from_rows(numbered(3), ViewOptions::default()).unwrap();
    assert!(matches!(
        view.set_page_size(0),
        Err(ViewError::InvalidArgument {
            name: "page_size",
            ..
        })
    ));
    assert!(matches!(
        view.set_page(0),
        Err(ViewError::InvalidArgument {
            name: "page_number",
            ..
        })
    ));
    assert!(DataView::from_rows(numbered(3), ViewOptions::new().with_page_size(0)).is_err());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut rows = numbered(2);
    rows.push(rows[0].clone());
    let err = DataView::from_rows(rows, ViewOptions::default()).unwrap_err();
    assert_eq!(err, ViewError::Model(ModelError::DuplicateId("1".to_string())));
}

#[test]
fn filtered_out_selection_disables_row_actions() {
    let mut view = DataView::from_rows(numbered(12), ViewOptions::default()).unwrap();
    view.select_row(RowId::from(3));
    assert!(view.is_action_enabled(ActionKind::Edit));
    assert!(view.visible_state().row_actions_enabled);

    view.set_query("student 11");
    let state = view.visible_state();
    assert_eq!(state.selected_id, None);
    assert!(!state.row_actions_enabled);
    assert!(!view.is_action_enabled(ActionKind::Delete));
    assert!(view.is_action_enabled(ActionKind::Add));

    // The tracker still holds the id; clearing the query brings it back.
    view.set_query("");
    assert_eq!(view.visible_state().selected_id, Some(RowId::from(3)));

    view.clear_selection();
    assert_eq!(view.visible_state().selected_id, None);
    assert!(!view.is_action_enabled(ActionKind::View));
}

#[test]
fn clicks_on_unknown_rows_are_ignored() {
    let mut view = DataView::from_rows(numbered(3), ViewOptions::default()).unwrap();
    view.select_row(RowId::from(2));
    assert!(!view.select_row(RowId::from(99)));
    assert_eq!(view.selection().current(), Some(&RowId::from(2)));
}

#[test]
fn empty_result_is_a_single_empty_page() {
    let mut view = DataView::from_rows(numbered(5), ViewOptions::default()).unwrap();
    view.set_query("nobody");
    let state = view.visible_state();
    assert!(state.is_empty());
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.current_page, 1);
    assert!(state.page_rows.is_empty());
    assert_eq!((state.first_row(), state.last_row()), (0, 0));
}

#[test]
fn search_fields_restrict_the_haystack() {
    let rows = vec![
        Row::from_pairs([
            ("id", Scalar::from(1)),
            ("name", "Arun".into()),
            ("dept", "MECH".into()),
        ])
        .unwrap(),
        Row::from_pairs([
            ("id", Scalar::from(2)),
            ("name", "Mechelle".into()),
            ("dept", "CSE".into()),
        ])
        .unwrap(),
    ];
    let mut view = DataView::from_rows(rows, ViewOptions::default()).unwrap();
    view.set_query("mech");
    assert_eq!(view.filtered_len(), 2);
    view.set_search_fields(Some(vec![field("dept")]));
    assert_eq!(ids(&view.visible_state().page_rows), vec!["1"]);
}

#[test]
fn local_edits_replace_rows_by_id() {
    let mut view = DataView::from_rows(numbered(3), ViewOptions::default()).unwrap();
    let edited = view
        .rows()
        .get(&RowId::from(2))
        .unwrap()
        .with_value(field("name"), Scalar::from("Renamed"))
        .unwrap();
    let previous = view.replace_row(edited).unwrap();
    assert_eq!(previous.get("name"), Some(&Scalar::from("Student 02")));

    view.set_query("renamed");
    assert_eq!(ids(&view.visible_state().page_rows), vec!["2"]);

    let stranger = Row::from_pairs([("id", 42)]).unwrap();
    assert_eq!(
        view.replace_row(stranger).unwrap_err(),
        ViewError::UnknownRow("42".to_string())
    );
}

#[test]
fn removing_the_selected_row_clears_selection_and_clamps_page() {
    let mut view = DataView::from_rows(numbered(11), ViewOptions::default()).unwrap();
    view.set_page(2).unwrap();
    view.select_row(RowId::from(11));
    assert!(view.remove_row(&RowId::from(11)).is_some());
    assert_eq!(view.selection().current(), None);
    assert_eq!(view.page_spec().number, 1);
    assert!(view.remove_row(&RowId::from(11)).is_none());
}

#[test]
fn inserted_rows_need_fresh_ids() {
    let mut view = DataView::from_rows(numbered(2), ViewOptions::default()).unwrap();
    view.insert_row(Row::from_pairs([("id", 3)]).unwrap()).unwrap();
    assert_eq!(view.visible_state().total, 3);
    assert!(view.insert_row(Row::from_pairs([("id", 3)]).unwrap()).is_err());
}

#[test]
fn reset_restores_defaults() {
    let mut view = DataView::from_rows(numbered(25), ViewOptions::default()).unwrap();
    view.set_query("student");
    view.set_sort(field("name"));
    view.set_page(3).unwrap();
    view.select_row(RowId::from(4));
    view.reset();
    let state = view.visible_state();
    assert_eq!(view.query(), "");
    assert_eq!(state.sort_key, None);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.selected_id, None);
}

#[test]
fn events_drive_the_same_operations() {
    let mut view = DataView::from_rows(numbered(23), ViewOptions::default()).unwrap();
    let events = vec![
        ViewEvent::QueryChanged("student".to_string()),
        ViewEvent::SortColumnClicked(field("name")),
        ViewEvent::SortColumnClicked(field("name")),
        ViewEvent::PageSizeChanged(5),
        ViewEvent::PageClicked(2),
        ViewEvent::RowClicked(RowId::from(17)),
    ];
    for event in events {
        view.apply(event).unwrap();
    }
    let state = view.visible_state();
    assert_eq!(state.current_page, 2);
    assert_eq!(ids(&state.page_rows), vec!["18", "17", "16", "15", "14"]);
    assert_eq!(state.selected_id, Some(RowId::from(17)));

    view.apply(ViewEvent::RowSetReplaced(numbered(4))).unwrap();
    let state = view.visible_state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.selected_id, None);

    assert!(view.apply(ViewEvent::PageSizeChanged(0)).is_err());
    view.apply(ViewEvent::Reset).unwrap();
    assert_eq!(view.visible_state().sort_key, None);
}

#[test]
fn options_choose_collation_and_tie_order() {
    let rows = vec![
        Row::from_pairs([("id", 1), ("marks", 9)]).unwrap(),
        Row::from_pairs([("id", 2), ("marks", 10)]).unwrap(),
        Row::from_pairs([("id", 3), ("marks", 9)]).unwrap(),
    ];
    let mut lexical = DataView::from_rows(rows.clone(), ViewOptions::default()).unwrap();
    lexical.set_sort(field("marks"));
    assert_eq!(ids(&lexical.visible_state().page_rows), vec!["2", "1", "3"]);
    lexical.set_sort(field("marks"));
    assert_eq!(ids(&lexical.visible_state().page_rows), vec!["3", "1", "2"]);

    let options = ViewOptions::new()
        .with_collation(Collation::Natural)
        .with_descending(DescendingOrder::Stable);
    let mut natural = DataView::from_rows(rows, options).unwrap();
    natural.set_sort(field("marks"));
    assert_eq!(ids(&natural.visible_state().page_rows), vec!["1", "3", "2"]);
    natural.set_sort(field("marks"));
    assert_eq!(ids(&natural.visible_state().page_rows), vec!["2", "1", "3"]);
}

/// A typed record, to show the controller is not tied to `Row`.
#[derive(Debug, Clone)]
struct Course {
    code: &'static str,
    title: &'static str,
    credits: i64,
}

impl Record for Course {
    type Id = &'static str;

    fn id(&self) -> Self::Id {
        self.code
    }

    fn value(&self, field: &str) -> Option<Cow<'_, Scalar>> {
        match field {
            "code" => Some(Cow::Owned(Scalar::from(self.code))),
            "title" => Some(Cow::Owned(Scalar::from(self.title))),
            "credits" => Some(Cow::Owned(Scalar::from(self.credits))),
            _ => None,
        }
    }

    fn values(&self) -> Vec<Cow<'_, Scalar>> {
        ["code", "title", "credits"]
            .iter()
            .filter_map(|field| self.value(field))
            .collect()
    }
}

#[test]
fn typed_records_work_through_the_record_trait() {
    let courses = vec![
        Course {
            code: "CS301",
            title: "Operating Systems",
            credits: 4,
        },
        Course {
            code: "CS205",
            title: "Data Structures",
            credits: 3,
        },
        Course {
            code: "MA101",
            title: "Engineering Mathematics",
            credits: 4,
        },
    ];
    let mut view = DataView::from_rows(courses, ViewOptions::default()).unwrap();
    view.set_search_fields(Some(vec![field("code")]));
    view.set_query("cs");
    view.set_sort(field("title"));
    let codes: Vec<&str> = view
        .visible_state()
        .page_rows
        .iter()
        .map(|course| course.code)
        .collect();
    assert_eq!(codes, vec!["CS205", "CS301"]);
    assert!(view.select_row("MA101"));
    assert_eq!(view.visible_state().selected_id, None);
}
