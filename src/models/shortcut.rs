//! Keyboard shortcut registry and its rebinding flow.

use serde::Serialize;

use crate::core::error::ShortcutError;

/// What a shortcut triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutAction {
    NewFile,
    NewFolder,
    Save,
    Run,
    ToggleConsole,
    FormatCode,
    TogglePreview,
    // Handled by the editor widget itself
    Find,
    Replace,
    ToggleComment,
    Indent,
    Outdent,
}

impl ShortcutAction {
    /// Whether the action is owned by the editor widget rather than the session.
    pub fn is_widget_action(&self) -> bool {
        matches!(
            self,
            Self::Find | Self::Replace | Self::ToggleComment | Self::Indent | Self::Outdent
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: &'static str,
    pub label: &'static str,
    pub key_combo: String,
    pub editable: bool,
    pub action: ShortcutAction,
}

impl Shortcut {
    fn new(
        id: &'static str,
        label: &'static str,
        key_combo: &str,
        editable: bool,
        action: ShortcutAction,
    ) -> Self {
        Self {
            id,
            label,
            key_combo: key_combo.to_string(),
            editable,
            action,
        }
    }

    pub fn matches(&self, combo: &str) -> bool {
        normalize_combo(&self.key_combo) == normalize_combo(combo)
    }
}

/// Pending rebinding captured from the settings dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEdit {
    pub id: &'static str,
    pub pending: String,
}

/// Fixed set of shortcuts; only editable ones may be rebound.
#[derive(Clone, Debug, Serialize)]
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
    editing: Option<ShortcutEdit>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        use ShortcutAction::*;
        Self {
            shortcuts: vec![
                Shortcut::new("new-file", "New File", "Ctrl+N", true, NewFile),
                Shortcut::new("new-folder", "New Folder", "Ctrl+Shift+N", true, NewFolder),
                Shortcut::new("save", "Save", "Ctrl+S", true, Save),
                Shortcut::new("run", "Run", "F5", true, Run),
                Shortcut::new("toggle-console", "Toggle Console", "Ctrl+`", true, ToggleConsole),
                Shortcut::new("format", "Format Code", "Shift+Alt+F", true, FormatCode),
                Shortcut::new("find", "Find", "Ctrl+F", false, Find),
                Shortcut::new("replace", "Replace", "Ctrl+H", false, Replace),
                Shortcut::new("comment", "Toggle Comment", "Ctrl+/", false, ToggleComment),
                Shortcut::new("indent", "Indent", "Tab", false, Indent),
                Shortcut::new("outdent", "Outdent", "Shift+Tab", false, Outdent),
                Shortcut::new("toggle-preview", "Toggle Preview", "Ctrl+P", true, TogglePreview),
            ],
            editing: None,
        }
    }
}

impl ShortcutRegistry {
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn get(&self, id: &str) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|s| s.id == id)
    }

    pub fn editing(&self) -> Option<&ShortcutEdit> {
        self.editing.as_ref()
    }

    /// Action bound to a key combination, if any.
    pub fn lookup(&self, combo: &str) -> Option<ShortcutAction> {
        self.shortcuts
            .iter()
            .find(|s| s.matches(combo))
            .map(|s| s.action)
    }

    /// Start editing a shortcut, seeding the capture with its current combo.
    pub fn begin_edit(&mut self, id: &str) -> Result<(), ShortcutError> {
        let shortcut = self
            .get(id)
            .ok_or_else(|| ShortcutError::Unknown(id.to_string()))?;
        if !shortcut.editable {
            return Err(ShortcutError::NotEditable(shortcut.label));
        }
        self.editing = Some(ShortcutEdit {
            id: shortcut.id,
            pending: shortcut.key_combo.clone(),
        });
        Ok(())
    }

    /// Record the combination typed into the capture field.
    pub fn capture(&mut self, combo: &str) {
        if let Some(edit) = self.editing.as_mut() {
            edit.pending = combo.trim().to_string();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply the captured combination. The new binding takes effect for
    /// [`lookup`](Self::lookup) immediately.
    pub fn commit_edit(&mut self) -> Result<&Shortcut, ShortcutError> {
        let edit = self.editing.as_ref().ok_or(ShortcutError::NotEditing)?;
        if edit.pending.is_empty() {
            return Err(ShortcutError::EmptyCombo);
        }
        if let Some(other) = self
            .shortcuts
            .iter()
            .find(|s| s.id != edit.id && s.matches(&edit.pending))
        {
            return Err(ShortcutError::Conflict {
                combo: edit.pending.clone(),
                label: other.label,
            });
        }

        let Some(edit) = self.editing.take() else {
            return Err(ShortcutError::NotEditing);
        };
        let shortcut = self
            .shortcuts
            .iter_mut()
            .find(|s| s.id == edit.id)
            .ok_or_else(|| ShortcutError::Unknown(edit.id.to_string()))?;
        shortcut.key_combo = edit.pending;
        Ok(shortcut)
    }
}

/// Canonical form of a combo: trimmed, case-folded, modifier order ignored.
fn normalize_combo(combo: &str) -> Vec<String> {
    let mut parts: Vec<String> = combo
        .split('+')
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .collect();
    let key = parts.pop();
    parts.sort();
    parts.extend(key);
    parts
}
