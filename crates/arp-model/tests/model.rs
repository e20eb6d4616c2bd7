//! Tests for arp-model types.

use std::str::FromStr;

use arp_model::{
    ActionCatalog, ActionEntry, ActionKind, ButtonColor, FieldList, FieldName, ModelError, Record,
    Row, RowId, RowSet, Scalar, SortDirection,
};

fn student(id: i64, name: &str) -> Row {
    Row::from_pairs([("id", Scalar::from(id)), ("name", Scalar::from(name))]).unwrap()
}

#[test]
fn field_name_rejects_blank() {
    assert!(matches!(
        FieldName::new("   "),
        Err(ModelError::InvalidFieldName(_))
    ));
    assert_eq!(FieldName::new("  name ").unwrap().as_str(), "name");
}

#[test]
fn row_requires_id_field() {
    let err = Row::from_pairs([("name", "Priya")]).unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingId {
            field: "id".to_string()
        }
    );
}

#[test]
fn row_with_custom_id_field() {
    let row = Row::with_id_field(
        FieldName::new("regNo").unwrap(),
        vec![
            (FieldName::new("regNo").unwrap(), Scalar::from("21CS001")),
            (FieldName::new("name").unwrap(), Scalar::from("Arun")),
        ],
    )
    .unwrap();
    assert_eq!(row.id(), RowId::from("21CS001"));
}

#[test]
fn row_keeps_field_order_and_replaces_duplicates() {
    let row = Row::from_pairs([
        ("id", Scalar::from(1)),
        ("name", Scalar::from("Priya")),
        ("dept", Scalar::from("CSE")),
        ("name", Scalar::from("Priya S")),
    ])
    .unwrap();
    let names: Vec<&str> = row.field_names().map(FieldName::as_str).collect();
    assert_eq!(names, vec!["id", "name", "dept"]);
    assert_eq!(row.get("name"), Some(&Scalar::from("Priya S")));
}

#[test]
fn replacement_rows_leave_original_untouched() {
    let original = student(1, "Priya");
    let edited = original
        .with_value(FieldName::new("name").unwrap(), Scalar::from("Priya R"))
        .unwrap();
    assert_eq!(original.get("name"), Some(&Scalar::from("Priya")));
    assert_eq!(edited.get("name"), Some(&Scalar::from("Priya R")));
    assert_eq!(edited.id(), original.id());
    assert!(original.without("id").is_err());
}

#[test]
fn row_json_preserves_document_order() {
    let row: Row = serde_json::from_str(r#"{"name":"kumar","id":2,"cgpa":8.5}"#).unwrap();
    assert_eq!(row.id(), RowId::from(2));
    let values: Vec<String> = row.values().iter().map(|v| v.to_string()).collect();
    assert_eq!(values, vec!["kumar", "2", "8.5"]);
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(json, r#"{"name":"kumar","id":2,"cgpa":8.5}"#);
}

#[test]
fn field_list_keys_rows_by_any_field() {
    let fields: FieldList = serde_json::from_str(r#"{"code":"CS10","title":"Operating Systems"}"#)
        .unwrap();
    assert!(serde_json::from_str::<Row>(r#"{"code":"CS10"}"#).is_err());
    let row = fields
        .into_row(FieldName::new("code").unwrap())
        .unwrap();
    assert_eq!(row.row_id(), &RowId::from("CS10"));
    assert_eq!(row.get("title"), Some(&Scalar::from("Operating Systems")));
}

#[test]
fn null_cells_are_absent_fields() {
    let row: Row = serde_json::from_str(r#"{"id":1,"email":null,"name":"Priya"}"#).unwrap();
    assert_eq!(row.get("email"), None);
    assert_eq!(row.get("name"), Some(&Scalar::from("Priya")));

    let fields: FieldList = serde_json::from_str(r#"{"code":"MA1","credits":null}"#).unwrap();
    let names: Vec<String> = fields
        .into_inner()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(names, vec!["code"]);

    assert!(serde_json::from_str::<Row>(r#"{"id":null}"#).is_err());
}

#[test]
fn row_set_rejects_duplicate_ids() {
    let err = RowSet::new(vec![student(1, "a"), student(1, "b")]).unwrap_err();
    assert_eq!(err, ModelError::DuplicateId("1".to_string()));
}

#[test]
fn row_set_replace_and_remove_by_id() {
    let mut rows = RowSet::new(vec![student(1, "a"), student(2, "b")]).unwrap();
    let previous = rows.replace(student(2, "bee")).unwrap();
    assert_eq!(previous.get("name"), Some(&Scalar::from("b")));
    assert!(rows.replace(student(9, "missing")).is_none());
    assert!(rows.remove(&RowId::from(1)).is_some());
    assert_eq!(rows.len(), 1);
    assert!(!rows.contains(&RowId::from(1)));
    assert_eq!(rows.into_rows(), vec![student(2, "bee")]);
}

#[test]
fn sort_direction_toggles() {
    assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    assert_eq!(SortDirection::default(), SortDirection::Asc);
}

#[test]
fn action_keys_parse_case_insensitively() {
    assert_eq!(ActionKind::from_str(" Edit ").unwrap(), ActionKind::Edit);
    assert_eq!(
        ActionKind::from_str("archive").unwrap_err(),
        ModelError::UnknownAction("archive".to_string())
    );
    assert_eq!(ButtonColor::from_str("DANGER").unwrap(), ButtonColor::Danger);
}

#[test]
fn builtin_catalog_covers_every_action() {
    let catalog = ActionCatalog::builtin();
    assert_eq!(catalog.iter().count(), ActionKind::ALL.len());
    for (kind, style) in catalog.iter() {
        assert!(!style.icon.is_empty(), "{kind} has no icon");
        assert_eq!(catalog.style(kind), style);
    }
    assert_eq!(catalog.style(ActionKind::Delete).color, ButtonColor::Danger);
}

fn full_entries() -> Vec<ActionEntry<'static>> {
    ActionKind::ALL
        .iter()
        .map(|kind| ActionEntry {
            key: kind.as_str(),
            icon: "cil-star",
            color: "primary",
            label: "",
        })
        .collect()
}

#[test]
fn catalog_from_entries_rejects_unknown_keys() {
    let mut entries = full_entries();
    entries.push(ActionEntry {
        key: "approve",
        icon: "cil-check",
        color: "success",
        label: "Approve",
    });
    assert_eq!(
        ActionCatalog::from_entries(entries).unwrap_err(),
        ModelError::UnknownAction("approve".to_string())
    );
}

#[test]
fn catalog_from_entries_rejects_unknown_colors_and_gaps() {
    let mut entries = full_entries();
    entries[0].color = "teal";
    assert_eq!(
        ActionCatalog::from_entries(entries).unwrap_err(),
        ModelError::UnknownColor("teal".to_string())
    );

    let mut entries = full_entries();
    entries.retain(|entry| entry.key != "print");
    assert_eq!(
        ActionCatalog::from_entries(entries).unwrap_err(),
        ModelError::MissingAction("print".to_string())
    );

    let mut entries = full_entries();
    entries.push(entries[1]);
    assert_eq!(
        ActionCatalog::from_entries(entries).unwrap_err(),
        ModelError::DuplicateAction("view".to_string())
    );
}

#[test]
fn catalog_from_entries_fills_default_labels() {
    let catalog = ActionCatalog::from_entries(full_entries()).unwrap();
    assert_eq!(catalog.style(ActionKind::Add).label, "Add New");
    assert_eq!(catalog.style(ActionKind::Add).icon, "cil-star");
}

#[test]
fn row_level_actions_require_selection() {
    let row_level: Vec<ActionKind> = ActionKind::ALL
        .into_iter()
        .filter(ActionKind::requires_selection)
        .collect();
    assert_eq!(
        row_level,
        vec![ActionKind::View, ActionKind::Edit, ActionKind::Delete]
    );
}
