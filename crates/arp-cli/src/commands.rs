use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use arp_cli::logging::redact_value;
use arp_cli::render::{actions_table, footer, page_table, tables_table, toolbar};
use arp_cli::script::parse_script;
use arp_core::{Collation, DataView, DescendingOrder, ViewOptions};
use arp_fixtures::{FixtureCatalog, FixtureTable};
use arp_model::{ActionCatalog, FieldName, Row, RowId};

use crate::cli::{OutputFormatArg, ReplayArgs, ViewArgs, ViewOptionArgs};

/// `--fixtures-dir` when given, otherwise `$ARP_FIXTURES_DIR` or the
/// built-in tables.
pub fn load_catalog(dir: Option<&Path>) -> Result<FixtureCatalog> {
    match dir {
        Some(dir) => FixtureCatalog::from_dir(dir)
            .with_context(|| format!("load fixtures from {}", dir.display())),
        None => FixtureCatalog::load_default().context("load fixtures"),
    }
}

pub fn run_tables(catalog: &FixtureCatalog) -> Result<()> {
    println!("{}", tables_table(catalog));
    Ok(())
}

pub fn run_actions() -> Result<()> {
    println!("{}", actions_table(&ActionCatalog::builtin()));
    Ok(())
}

pub fn run_view(catalog: &FixtureCatalog, args: &ViewArgs) -> Result<()> {
    let table = catalog.table(&args.table)?;
    let span = info_span!("view", table = %table.name());
    let _guard = span.enter();

    let mut view = open_view(table, &args.options)?;
    if !args.fields.is_empty() {
        let fields = args
            .fields
            .iter()
            .map(|field| FieldName::new(field.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .context("parse --field")?;
        view.set_search_fields(Some(fields));
    }
    if let Some(query) = &args.query {
        info!(query = redact_value(query), "searching");
        view.set_query(query.as_str());
    }
    for key in &args.sort {
        let key = FieldName::new(key.as_str()).context("parse --sort")?;
        view.set_sort(key);
    }
    if let Some(page) = args.page {
        view.set_page(page).context("apply --page")?;
    }
    if let Some(id) = &args.select {
        if !view.select_row(RowId::from(id.as_str())) {
            warn!(row_id = redact_value(id), "no row with this id");
        }
    }

    print_state(table, &view, args.options.format, false)
}

pub fn run_replay(catalog: &FixtureCatalog, args: &ReplayArgs) -> Result<()> {
    let table = catalog.table(&args.table)?;
    let span = info_span!("replay", table = %table.name());
    let _guard = span.enter();

    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let lines = parse_script(&source)?;
    info!(events = lines.len(), "replaying script");

    let id_field = table.spec.id_field()?;
    let mut view = open_view(table, &args.options)?;
    let last = lines.len();
    for (position, line) in lines.into_iter().enumerate() {
        let event = line
            .event
            .into_view_event(&id_field)
            .with_context(|| format!("script line {}", line.line))?;
        let name = event.name();
        debug!(line = line.line, event = name, "applying event");
        view.apply(event)
            .with_context(|| format!("script line {}", line.line))?;

        if args.final_only && position + 1 != last {
            continue;
        }
        if args.options.format == OutputFormatArg::Table {
            println!("-- line {}: {name} --", line.line);
        }
        print_state(table, &view, args.options.format, true)?;
    }
    if last == 0 {
        print_state(table, &view, args.options.format, true)?;
    }
    Ok(())
}

/// A view with the table's manifest options, then the command-line flags.
fn open_view(table: &FixtureTable, flags: &ViewOptionArgs) -> Result<DataView<Row>> {
    let mut options = table.spec.view_options(ViewOptions::default());
    if let Some(page_size) = flags.page_size {
        options.page_size = page_size;
    }
    if flags.natural_sort {
        options.collation = Collation::Natural;
    }
    if flags.stable_desc {
        options.descending = DescendingOrder::Stable;
    }
    table
        .view_with_options(options)
        .with_context(|| format!("open table {}", table.name()))
}

/// Print the visible state. JSON goes out pretty-printed for a single view
/// and one object per line when replaying.
fn print_state(
    table: &FixtureTable,
    view: &DataView<Row>,
    format: OutputFormatArg,
    compact: bool,
) -> Result<()> {
    let state = view.visible_state();
    match format {
        OutputFormatArg::Json => {
            let json = if compact {
                serde_json::to_string(&state)
            } else {
                serde_json::to_string_pretty(&state)
            }
            .context("serialize view state")?;
            println!("{json}");
        }
        OutputFormatArg::Table => {
            println!("{}", table.spec.title);
            if !view.query().is_empty() {
                println!("Search: {}", view.query());
            }
            let actions = ActionCatalog::builtin();
            println!("{}", toolbar(&actions, |kind| view.is_action_enabled(kind)));
            println!("{}", page_table(table.columns(), &state));
            println!("{}", footer(&state));
        }
    }
    Ok(())
}
