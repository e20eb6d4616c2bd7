//! Action buttons shown around the console's tables.
//!
//! Each button is addressed by a key (`"edit"`, `"delete"`, ...) that maps to
//! an icon asset and a colour class. The mapping is an explicit table built
//! once at startup: unknown keys are rejected while the table is built, so a
//! lookup by [`ActionKind`] always yields a style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    View,
    Edit,
    Delete,
    Save,
    Cancel,
    Search,
    Reset,
    Upload,
    Download,
    Print,
    Back,
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::Add,
        ActionKind::View,
        ActionKind::Edit,
        ActionKind::Delete,
        ActionKind::Save,
        ActionKind::Cancel,
        ActionKind::Search,
        ActionKind::Reset,
        ActionKind::Upload,
        ActionKind::Download,
        ActionKind::Print,
        ActionKind::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::Save => "save",
            ActionKind::Cancel => "cancel",
            ActionKind::Search => "search",
            ActionKind::Reset => "reset",
            ActionKind::Upload => "upload",
            ActionKind::Download => "download",
            ActionKind::Print => "print",
            ActionKind::Back => "back",
        }
    }

    /// Row-level actions operate on the selected row and are disabled
    /// while nothing is selected.
    pub fn requires_selection(&self) -> bool {
        matches!(self, ActionKind::View | ActionKind::Edit | ActionKind::Delete)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 8] = [
        ButtonColor::Primary,
        ButtonColor::Secondary,
        ButtonColor::Success,
        ButtonColor::Danger,
        ButtonColor::Warning,
        ButtonColor::Info,
        ButtonColor::Light,
        ButtonColor::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonColor::Primary => "primary",
            ButtonColor::Secondary => "secondary",
            ButtonColor::Success => "success",
            ButtonColor::Danger => "danger",
            ButtonColor::Warning => "warning",
            ButtonColor::Info => "info",
            ButtonColor::Light => "light",
            ButtonColor::Dark => "dark",
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ButtonColor::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownColor(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStyle {
    pub icon: String,
    pub color: ButtonColor,
    pub label: String,
}

/// One untyped row of an action table, as read from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry<'a> {
    pub key: &'a str,
    pub icon: &'a str,
    pub color: &'a str,
    pub label: &'a str,
}

/// Complete kind → style lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCatalog {
    // Indexed by `ActionKind::index`; always holds one style per kind.
    styles: Vec<ActionStyle>,
}

impl ActionCatalog {
    /// The console's standard buttons.
    pub fn builtin() -> Self {
        Self {
            styles: ActionKind::ALL.into_iter().map(builtin_style).collect(),
        }
    }

    /// Build a catalog from untyped entries, rejecting unknown action keys,
    /// unknown colours, blank icons, duplicates and missing kinds.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = ActionEntry<'a>>,
    {
        let mut slots: Vec<Option<ActionStyle>> = vec![None; ActionKind::ALL.len()];
        for entry in entries {
            let kind = ActionKind::from_str(entry.key)?;
            let color = ButtonColor::from_str(entry.color)?;
            let icon = entry.icon.trim();
            if icon.is_empty() {
                return Err(ModelError::InvalidActionEntry {
                    key: entry.key.to_string(),
                    message: "icon asset is empty".to_string(),
                });
            }
            let slot = &mut slots[kind.index()];
            if slot.is_some() {
                return Err(ModelError::DuplicateAction(kind.to_string()));
            }
            let label = entry.label.trim();
            *slot = Some(ActionStyle {
                icon: icon.to_string(),
                color,
                label: if label.is_empty() {
                    default_label(kind).to_string()
                } else {
                    label.to_string()
                },
            });
        }
        let styles = ActionKind::ALL
            .into_iter()
            .zip(slots)
            .map(|(kind, slot)| slot.ok_or_else(|| ModelError::MissingAction(kind.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { styles })
    }

    pub fn style(&self, kind: ActionKind) -> &ActionStyle {
        &self.styles[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionKind, &ActionStyle)> {
        ActionKind::ALL.into_iter().zip(self.styles.iter())
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_style(kind: ActionKind) -> ActionStyle {
    let (icon, color) = match kind {
        ActionKind::Add => ("cil-plus", ButtonColor::Primary),
        ActionKind::View => ("cil-magnifying-glass", ButtonColor::Info),
        ActionKind::Edit => ("cil-pencil", ButtonColor::Warning),
        ActionKind::Delete => ("cil-trash", ButtonColor::Danger),
        ActionKind::Save => ("cil-save", ButtonColor::Success),
        ActionKind::Cancel => ("cil-x", ButtonColor::Secondary),
        ActionKind::Search => ("cil-search", ButtonColor::Primary),
        ActionKind::Reset => ("cil-reload", ButtonColor::Secondary),
        ActionKind::Upload => ("cil-cloud-upload", ButtonColor::Info),
        ActionKind::Download => ("cil-cloud-download", ButtonColor::Info),
        ActionKind::Print => ("cil-print", ButtonColor::Dark),
        ActionKind::Back => ("cil-arrow-left", ButtonColor::Light),
    };
    ActionStyle {
        icon: icon.to_string(),
        color,
        label: default_label(kind).to_string(),
    }
}

fn default_label(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Add => "Add New",
        ActionKind::View => "View",
        ActionKind::Edit => "Edit",
        ActionKind::Delete => "Delete",
        ActionKind::Save => "Save",
        ActionKind::Cancel => "Cancel",
        ActionKind::Search => "Search",
        ActionKind::Reset => "Reset",
        ActionKind::Upload => "Upload",
        ActionKind::Download => "Download",
        ActionKind::Print => "Print",
        ActionKind::Back => "Back",
    }
}
