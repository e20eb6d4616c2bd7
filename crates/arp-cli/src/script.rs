//! JSON-lines event scripts for `arp replay`.
//!
//! Each non-blank line is one object tagged by `event`:
//!
//! ```text
//! {"event":"query","text":"pri"}
//! {"event":"sort","key":"name"}
//! {"event":"page_size","size":5}
//! {"event":"page","number":2}
//! {"event":"select","id":17}
//! {"event":"load","rows":[{"id":1,"name":"Priya Raman"}]}
//! {"event":"reset"}
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use arp_core::ViewEvent;
use arp_model::{FieldList, FieldName, Row, RowId, Scalar};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Query { text: String },
    Sort { key: FieldName },
    PageSize { size: usize },
    Page { number: usize },
    Select { id: Scalar },
    Load { rows: Vec<FieldList> },
    Reset,
}

/// A parsed event with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub event: ScriptEvent,
}

impl ScriptEvent {
    /// Convert to a controller event. Loaded rows are keyed by `id_field`.
    pub fn into_view_event(self, id_field: &FieldName) -> Result<ViewEvent<Row>> {
        Ok(match self {
            ScriptEvent::Query { text } => ViewEvent::QueryChanged(text),
            ScriptEvent::Sort { key } => ViewEvent::SortColumnClicked(key),
            ScriptEvent::PageSize { size } => ViewEvent::PageSizeChanged(size),
            ScriptEvent::Page { number } => ViewEvent::PageClicked(number),
            ScriptEvent::Select { id } => ViewEvent::RowClicked(RowId::from(&id)),
            ScriptEvent::Load { rows } => {
                let rows = rows
                    .into_iter()
                    .enumerate()
                    .map(|(idx, fields)| {
                        fields
                            .into_row(id_field.clone())
                            .with_context(|| format!("loaded row {}", idx + 1))
                    })
                    .collect::<Result<Vec<_>>>()?;
                ViewEvent::RowSetReplaced(rows)
            }
            ScriptEvent::Reset => ViewEvent::Reset,
        })
    }
}

/// Parse a whole script. Blank lines are skipped; line numbers are 1-based.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| {
            let event = serde_json::from_str(text.trim())
                .with_context(|| format!("script line {}", idx + 1))?;
            Ok(ScriptLine {
                line: idx + 1,
                event,
            })
        })
        .collect()
}
