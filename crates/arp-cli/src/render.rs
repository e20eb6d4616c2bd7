//! Terminal rendering of tables, toolbars and footers.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use arp_fixtures::FixtureCatalog;
use arp_model::{
    ActionCatalog, ActionKind, ButtonColor, FieldName, Record, Row, SortDirection, ViewState,
};

/// Buttons shown above a list view, in display order.
pub const TOOLBAR_ACTIONS: [ActionKind; 6] = [
    ActionKind::Add,
    ActionKind::View,
    ActionKind::Edit,
    ActionKind::Delete,
    ActionKind::Download,
    ActionKind::Print,
];

pub const EMPTY_MESSAGE: &str = "No records found";

const SELECTED_MARKER: &str = "●";
const UNSELECTED_MARKER: &str = "○";

/// `Showing x-y of n | Page p of tp`.
pub fn footer<R: Record>(state: &ViewState<'_, R>) -> String {
    format!(
        "Showing {}-{} of {} | Page {} of {}",
        state.first_row(),
        state.last_row(),
        state.total,
        state.current_page,
        state.total_pages
    )
}

/// Toolbar labels, enabled buttons in brackets and disabled ones in
/// parentheses.
pub fn toolbar(catalog: &ActionCatalog, enabled: impl Fn(ActionKind) -> bool) -> String {
    TOOLBAR_ACTIONS
        .iter()
        .map(|&kind| {
            let label = &catalog.style(kind).label;
            if enabled(kind) {
                format!("[{label}]")
            } else {
                format!("({label})")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Column header text, with an arrow on the active sort column.
pub fn column_heading(column: &FieldName, state: &ViewState<'_, Row>) -> String {
    match (&state.sort_key, state.sort_direction) {
        (Some(key), Some(SortDirection::Asc)) if key == column => format!("{column} ▲"),
        (Some(key), Some(SortDirection::Desc)) if key == column => format!("{column} ▼"),
        _ => column.to_string(),
    }
}

/// The visible page as a table: a selection marker column, then `columns`.
/// An empty page renders a single "No records found" row.
pub fn page_table(columns: &[FieldName], state: &ViewState<'_, Row>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(
        columns
            .iter()
            .map(|column| header_cell(&column_heading(column, state))),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);

    if state.page_rows.is_empty() {
        let mut cells = vec![Cell::new(""), dim_cell(EMPTY_MESSAGE)];
        cells.extend(columns.iter().skip(1).map(|_| Cell::new("")));
        table.add_row(cells);
        return table;
    }

    for row in &state.page_rows {
        let selected = state.selected_id.as_ref() == Some(row.row_id());
        let marker = if selected {
            Cell::new(SELECTED_MARKER).fg(Color::Green)
        } else {
            dim_cell(UNSELECTED_MARKER)
        };
        let mut cells = vec![marker];
        cells.extend(columns.iter().map(|column| value_cell(row, column, selected)));
        table.add_row(cells);
    }
    table
}

/// One line per table: name, title, row count, columns.
pub fn tables_table(catalog: &FixtureCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Title"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for fixture in catalog.tables() {
        let columns = fixture
            .columns()
            .iter()
            .map(FieldName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(fixture.name()).add_attribute(Attribute::Bold),
            Cell::new(&fixture.spec.title),
            Cell::new(fixture.rows.len()),
            Cell::new(columns),
        ]);
    }
    table
}

pub fn actions_table(catalog: &ActionCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Icon"),
        header_cell("Color"),
        header_cell("Label"),
        header_cell("Needs selection"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for (kind, style) in catalog.iter() {
        table.add_row(vec![
            Cell::new(kind.as_str()).add_attribute(Attribute::Bold),
            Cell::new(&style.icon),
            Cell::new(style.color.as_str()).fg(button_color(style.color)),
            Cell::new(&style.label),
            if kind.requires_selection() {
                Cell::new("yes")
            } else {
                dim_cell("no")
            },
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(row: &Row, column: &FieldName, selected: bool) -> Cell {
    let value = row.get(column.as_str());
    let mut cell = Cell::new(value.map(ToString::to_string).unwrap_or_default());
    if value.is_some_and(arp_model::Scalar::is_numeric) {
        cell = cell.set_alignment(CellAlignment::Right);
    }
    if selected {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn button_color(color: ButtonColor) -> Color {
    match color {
        ButtonColor::Primary => Color::Blue,
        ButtonColor::Secondary => Color::Grey,
        ButtonColor::Success => Color::Green,
        ButtonColor::Danger => Color::Red,
        ButtonColor::Warning => Color::Yellow,
        ButtonColor::Info => Color::Cyan,
        ButtonColor::Light => Color::White,
        ButtonColor::Dark => Color::DarkGrey,
    }
}
