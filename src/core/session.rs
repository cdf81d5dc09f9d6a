//! Editor session state.
//!
//! [`Session`] owns everything a user interaction can touch: the entry
//! table, the active file and its buffer, the console log, the feedback
//! banner and the runner status. All methods are synchronous; the async
//! pieces (runner delays, banner timers) live in [`crate::app`] and call
//! back in through [`Session::begin_run`], [`Session::finish_run`] and
//! [`Session::dismiss_feedback`].

use serde::Serialize;

use crate::config::{
    DEFAULT_FILE_STEM, RUN_BUSY, RUN_END_BANNER, RUN_NO_FILE, RUN_START_BANNER,
    RUNNER_INIT_FAILED, RUNNER_READY_PREFIX,
};
use crate::core::engine::{RunnerStatus, Transcript};
use crate::core::error::{RunnerError, SimulationError, TreeError};
use crate::core::preview::{Preview, preview};
use crate::core::store::{EntryStore, NewEntry};
use crate::core::tree::{self, TreeRow};
use crate::models::{
    ConsoleEntry, ConsoleLog, DismissTicket, EditorSettings, Entry, EntryId, Feedback,
    FeedbackKind, Language, ShortcutAction, ShortcutRegistry,
};

// =============================================================================
// Run planning
// =============================================================================

/// Which engine path a run takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Immediate per-language simulation.
    Local,
    /// Delayed simulated runner.
    Runner,
}

/// A run accepted by [`Session::begin_run`], waiting for its transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunPlan {
    pub language: Language,
    pub source: String,
    pub mode: RunMode,
}

/// Result of routing a key combination through the shortcut registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "action", rename_all = "kebab-case")]
pub enum ShortcutOutcome {
    /// No binding for the combination.
    Unbound,
    /// The combination was recorded into an open shortcut edit.
    Captured,
    /// The session performed the action.
    Applied(ShortcutAction),
    /// The host should start a run.
    RunRequested,
    /// The host should invoke the widget's formatter.
    FormatRequested,
    /// The action belongs to the editing widget.
    Widget(ShortcutAction),
}

// =============================================================================
// Session
// =============================================================================

/// In-memory state of one editor session.
#[derive(Debug)]
pub struct Session {
    store: EntryStore,
    language: Language,
    active_file: Option<EntryId>,
    file_name: String,
    buffer: String,
    console: ConsoleLog,
    feedback: Feedback,
    pending_dismiss: Option<DismissTicket>,
    runner: RunnerStatus,
    is_running: bool,
    shortcuts: ShortcutRegistry,
    settings: EditorSettings,
    console_minimized: bool,
    show_preview: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EntryStore::sample())
    }
}

impl Session {
    /// Start a session over `store` with no file open and the default
    /// language's template in the buffer.
    pub fn new(store: EntryStore) -> Self {
        let language = Language::default();
        Self {
            store,
            language,
            active_file: None,
            file_name: untitled_name(language),
            buffer: language.template().to_string(),
            console: ConsoleLog::new(),
            feedback: Feedback::default(),
            pending_dismiss: None,
            runner: RunnerStatus::default(),
            is_running: false,
            shortcuts: ShortcutRegistry::default(),
            settings: EditorSettings::default(),
            console_minimized: false,
            show_preview: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_file(&self) -> Option<&EntryId> {
        self.active_file.as_ref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn console(&self) -> &ConsoleLog {
        &self.console
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn runner(&self) -> &RunnerStatus {
        &self.runner
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn shortcuts(&self) -> &ShortcutRegistry {
        &self.shortcuts
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn console_minimized(&self) -> bool {
        self.console_minimized
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    fn log(&mut self, entry: ConsoleEntry) {
        self.console.push(entry);
    }

    // =========================================================================
    // Feedback banner
    // =========================================================================

    /// Show a banner, replacing any current one.
    ///
    /// The ticket for the new banner is queued for the caller that owns the
    /// timers (see [`take_pending_dismiss`](Self::take_pending_dismiss)).
    pub fn show_feedback(&mut self, message: impl Into<String>, kind: FeedbackKind) {
        self.pending_dismiss = Some(self.feedback.show(message, kind));
    }

    /// Ticket of the most recent banner that has no dismiss timer yet.
    pub fn take_pending_dismiss(&mut self) -> Option<DismissTicket> {
        self.pending_dismiss.take()
    }

    /// Hide the banner if `ticket` is still current.
    pub fn dismiss_feedback(&mut self, ticket: DismissTicket) -> bool {
        self.feedback.dismiss(ticket)
    }

    // =========================================================================
    // Buffer and language
    // =========================================================================

    /// Switch the active language.
    ///
    /// With no file open, the buffer is reset to the language's template.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if self.active_file.is_none() {
            self.buffer = language.template().to_string();
            self.file_name = untitled_name(language);
        }
    }

    /// Replace the buffer with the widget's current text.
    pub fn edit_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        if self.settings.auto_save
            && let Some(id) = &self.active_file
        {
            self.store.set_content(id, &self.buffer);
        }
    }

    /// Stored content and name of the active file.
    fn active_entry(&self) -> Option<&Entry> {
        self.active_file
            .as_ref()
            .and_then(|id| self.store.get(id))
            .filter(|e| e.is_file())
    }

    fn buffer_is_dirty(&self) -> Option<bool> {
        self.active_entry()
            .and_then(Entry::content)
            .map(|stored| stored != self.buffer)
    }

    /// Explicit save. Returns whether anything was written.
    pub fn save(&mut self) -> bool {
        let Some(dirty) = self.buffer_is_dirty() else {
            return false;
        };
        if !dirty {
            self.log(ConsoleEntry::info("No changes to save"));
            return false;
        }

        self.save_silently();
        let name = self
            .active_entry()
            .map(|e| e.name.clone())
            .unwrap_or_default();
        let message = format!("{name} file saved successfully");
        self.log(ConsoleEntry::success(&message));
        self.show_feedback(message, FeedbackKind::Success);
        true
    }

    /// Write the buffer into the active file without any console output.
    pub fn save_silently(&mut self) -> bool {
        if self.buffer_is_dirty() != Some(true) {
            return false;
        }
        match &self.active_file {
            Some(id) => self.store.set_content(id, &self.buffer),
            None => false,
        }
    }

    // =========================================================================
    // File tree actions
    // =========================================================================

    /// Make `id` the active file, loading its content and language.
    ///
    /// Pending edits to the previous file are written back first.
    pub fn open_file(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.store.get(id).filter(|e| e.is_file()).cloned() else {
            return false;
        };
        self.save_silently();

        self.active_file = Some(entry.id.clone());
        self.file_name = entry.name.clone();
        self.buffer = entry.content().unwrap_or_default().to_string();
        if let Some(language) = entry.extension().and_then(Language::from_extension) {
            self.language = language;
        }

        self.show_feedback(format!("{} file opened", entry.name), FeedbackKind::Info);
        true
    }

    /// Expand or collapse a folder. Returns the new state.
    pub fn toggle_folder(&mut self, id: &EntryId) -> Option<bool> {
        let open = self.store.toggle_open(id)?;
        let name = self.store.get(id).map(|e| e.name.clone()).unwrap_or_default();
        let state = if open { "opened" } else { "closed" };
        self.show_feedback(format!("{name} folder {state}"), FeedbackKind::Info);
        Some(open)
    }

    /// Create a file in the active language under `parent` and open it.
    pub fn create_file(&mut self, parent: Option<&EntryId>) -> Option<EntryId> {
        let entry = self
            .store
            .create(NewEntry::File(self.language), parent, None)?;

        self.open_file(&entry.id);
        if let Some(parent) = parent {
            self.store.open_ancestors(parent);
        }

        self.log(ConsoleEntry::info(format!("✨ New file {} created", entry.name)));
        self.show_feedback(
            format!("New file {} created", entry.name),
            FeedbackKind::Success,
        );
        Some(entry.id)
    }

    /// Create an expanded folder under `parent`.
    pub fn create_folder(&mut self, parent: Option<&EntryId>) -> Option<EntryId> {
        let entry = self.store.create(NewEntry::Folder, parent, None)?;

        if let Some(parent) = parent {
            self.store.open_ancestors(parent);
        }

        self.log(ConsoleEntry::info(format!("📁 New folder {} created", entry.name)));
        self.show_feedback(
            format!("New folder {} created", entry.name),
            FeedbackKind::Success,
        );
        Some(entry.id)
    }

    /// Delete an entry and everything under it.
    ///
    /// Closes the active file if it was among the removed entries.
    pub fn delete(&mut self, id: &EntryId) -> bool {
        let Some(removed) = self.store.delete(id) else {
            return false;
        };

        if let Some(active) = &self.active_file
            && removed.iter().any(|e| &e.id == active)
        {
            self.active_file = None;
            self.buffer.clear();
            self.file_name.clear();
        }

        self.log(ConsoleEntry::info(format!("Deleted: {}", removed[0].name)));
        true
    }

    /// Rename an entry. Blank or unchanged names are ignored.
    pub fn rename(&mut self, id: &EntryId, new_name: &str) -> bool {
        let new_name = new_name.trim();
        let Some(old_name) = self.store.get(id).map(|e| e.name.clone()) else {
            return false;
        };
        if new_name.is_empty() || new_name == old_name {
            return false;
        }
        let Some(renamed) = self.store.rename(id, new_name) else {
            return false;
        };

        if self.active_file.as_ref() == Some(id) {
            self.file_name = renamed.name;
        }

        let message = format!("{old_name} renamed to {new_name}");
        self.log(ConsoleEntry::info(&message));
        self.show_feedback(message, FeedbackKind::Success);
        true
    }

    /// Duplicate a file next to itself.
    pub fn duplicate(&mut self, id: &EntryId) -> Option<EntryId> {
        let copy = self.store.duplicate(id)?;
        self.log(ConsoleEntry::info(format!("Duplicated file: {}", copy.name)));
        Some(copy.id)
    }

    /// Full path of `id` for the host clipboard.
    ///
    /// A parent cycle means the table is corrupted and is returned as an
    /// error; a missing entry is a no-op.
    pub fn copy_path(&mut self, id: &EntryId) -> Result<Option<String>, TreeError> {
        let path = match tree::full_path(self.store.entries(), id) {
            Ok(path) => path,
            Err(TreeError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err),
        };
        self.log(ConsoleEntry::info(format!("Copied path: {path}")));
        Ok(Some(path))
    }

    /// Record a format request. Returns whether the host should run the
    /// widget's formatter.
    pub fn format_code(&mut self) -> bool {
        if self.active_file.is_none() {
            return false;
        }
        self.log(ConsoleEntry::info("Code formatting completed"));
        true
    }

    // =========================================================================
    // Panels
    // =========================================================================

    pub fn toggle_console(&mut self) -> bool {
        self.console_minimized = !self.console_minimized;
        self.console_minimized
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.show_preview = !self.show_preview;
        self.show_preview
    }

    /// Preview of the active file, when the preview pane is shown.
    pub fn preview(&self) -> Option<Preview> {
        if !self.show_preview {
            return None;
        }
        let entry = self.active_entry()?;
        Some(preview(
            self.language,
            &entry.name,
            entry.content().unwrap_or_default(),
        ))
    }

    // =========================================================================
    // Shortcuts
    // =========================================================================

    /// Route a key combination.
    ///
    /// While a shortcut edit is open, the combination is captured instead of
    /// dispatched.
    pub fn dispatch_shortcut(&mut self, combo: &str) -> ShortcutOutcome {
        if self.shortcuts.editing().is_some() {
            self.shortcuts.capture(combo);
            return ShortcutOutcome::Captured;
        }

        let Some(action) = self.shortcuts.lookup(combo) else {
            return ShortcutOutcome::Unbound;
        };
        log::debug!("shortcut {combo} -> {action:?}");

        match action {
            ShortcutAction::NewFile => {
                self.create_file(None);
            }
            ShortcutAction::NewFolder => {
                self.create_folder(None);
            }
            ShortcutAction::Save => {
                self.save();
            }
            ShortcutAction::ToggleConsole => {
                self.toggle_console();
            }
            ShortcutAction::TogglePreview => {
                self.toggle_preview();
            }
            ShortcutAction::Run => return ShortcutOutcome::RunRequested,
            ShortcutAction::FormatCode => {
                return if self.format_code() {
                    ShortcutOutcome::FormatRequested
                } else {
                    ShortcutOutcome::Applied(action)
                };
            }
            widget if widget.is_widget_action() => return ShortcutOutcome::Widget(widget),
            _ => {}
        }
        ShortcutOutcome::Applied(action)
    }

    /// Open the rebinding flow for a shortcut.
    pub fn begin_shortcut_edit(&mut self, id: &str) -> bool {
        match self.shortcuts.begin_edit(id) {
            Ok(()) => true,
            Err(err) => {
                self.log(ConsoleEntry::error(err.to_string()));
                false
            }
        }
    }

    pub fn cancel_shortcut_edit(&mut self) {
        self.shortcuts.cancel_edit();
    }

    /// Apply the captured combination. Failures are reported on the console
    /// and leave the edit open.
    pub fn commit_shortcut_edit(&mut self) -> bool {
        match self.shortcuts.commit_edit() {
            Ok(shortcut) => {
                let message = format!("{} shortcut set to {}", shortcut.label, shortcut.key_combo);
                self.log(ConsoleEntry::success(message));
                true
            }
            Err(err) => {
                self.log(ConsoleEntry::error(err.to_string()));
                false
            }
        }
    }

    // =========================================================================
    // Runner and runs
    // =========================================================================

    /// Record a successful runner handshake.
    pub fn runner_ready(&mut self, languages: Vec<Language>) {
        let tags: Vec<&str> = languages.iter().map(Language::tag).collect();
        self.log(ConsoleEntry::info(format!(
            "{RUNNER_READY_PREFIX}{}",
            tags.join(", ")
        )));
        self.runner = RunnerStatus::Ready { languages };
    }

    /// Record a failed handshake. Runs stay local for the rest of the session.
    pub fn runner_failed(&mut self, err: &RunnerError) {
        log::warn!("runner initialization failed: {err}");
        self.runner = RunnerStatus::Unavailable;
        self.log(ConsoleEntry::error(RUNNER_INIT_FAILED));
    }

    /// Accept a run request.
    ///
    /// Saves the buffer, writes the start banner and picks the engine path.
    /// Returns `None` (after logging why) when no file is open or a run is
    /// already in flight.
    pub fn begin_run(&mut self) -> Option<RunPlan> {
        if self.is_running {
            self.log(ConsoleEntry::error(RUN_BUSY));
            return None;
        }
        if self.active_file.is_none() {
            self.log(ConsoleEntry::error(RUN_NO_FILE));
            return None;
        }
        self.active_entry()?;

        self.save_silently();
        self.log(ConsoleEntry::system(RUN_START_BANNER));
        self.is_running = true;

        let mode = if self.runner.supports(self.language) {
            self.log(ConsoleEntry::info(format!(
                "Running {} code...",
                self.language.label()
            )));
            RunMode::Runner
        } else {
            RunMode::Local
        };

        log::debug!("run accepted: {} via {mode:?}", self.language);
        Some(RunPlan {
            language: self.language,
            source: self.buffer.clone(),
            mode,
        })
    }

    /// Write a run's transcript (or error) and the completion banner.
    pub fn finish_run(&mut self, result: Result<Transcript, SimulationError>) {
        match result {
            Ok(transcript) => self.log(ConsoleEntry::output(transcript.into_string())),
            Err(err) => self.log(ConsoleEntry::error(err.to_string())),
        }
        self.log(ConsoleEntry::system(RUN_END_BANNER));
        self.is_running = false;
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Serializable view of the whole session for the host.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            entries: self.store.entries(),
            rows: tree::visible_rows(self.store.entries()),
            language: self.language,
            widget_language: self.language.widget_id(),
            active_file: self.active_file.as_ref(),
            file_name: &self.file_name,
            buffer: &self.buffer,
            console: &self.console,
            feedback: &self.feedback,
            runner: &self.runner,
            is_running: self.is_running,
            shortcuts: &self.shortcuts,
            settings: &self.settings,
            console_minimized: self.console_minimized,
            show_preview: self.show_preview,
            preview: self.preview(),
        }
    }
}

fn untitled_name(language: Language) -> String {
    format!("{DEFAULT_FILE_STEM}{}", language.extension())
}

/// Borrowed, serializable view of a [`Session`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub entries: &'a [Entry],
    pub rows: Vec<TreeRow<'a>>,
    pub language: Language,
    /// Language id the editing widget highlights with (`cpp`, `csharp`, ...).
    pub widget_language: &'static str,
    pub active_file: Option<&'a EntryId>,
    pub file_name: &'a str,
    pub buffer: &'a str,
    pub console: &'a ConsoleLog,
    pub feedback: &'a Feedback,
    pub runner: &'a RunnerStatus,
    pub is_running: bool,
    pub shortcuts: &'a ShortcutRegistry,
    pub settings: &'a EditorSettings,
    pub console_minimized: bool,
    pub show_preview: bool,
    pub preview: Option<Preview>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::simulate;
    use crate::models::ConsoleKind;

    fn id(s: &str) -> EntryId {
        EntryId::from(s)
    }

    fn texts(session: &Session) -> Vec<&str> {
        session
            .console()
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect()
    }

    fn run_locally(session: &mut Session) {
        let plan = session.begin_run().unwrap();
        assert_eq!(plan.mode, RunMode::Local);
        session.finish_run(simulate(plan.language, &plan.source));
    }

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.language(), Language::Python);
        assert_eq!(session.file_name(), "untitled.py");
        assert_eq!(session.buffer(), Language::Python.template());
        assert!(session.active_file().is_none());
        assert!(session.console().is_empty());
        assert_eq!(session.runner(), &RunnerStatus::Pending);
    }

    #[test]
    fn test_set_language_without_file_loads_template() {
        let mut session = Session::default();
        session.set_language(Language::Java);
        assert_eq!(session.buffer(), Language::Java.template());
        assert_eq!(session.file_name(), "untitled.java");
    }

    #[test]
    fn test_set_language_with_file_keeps_buffer() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        session.set_language(Language::JavaScript);
        assert_eq!(session.buffer(), "print(\"Hello, World!\")");
        assert_eq!(session.language(), Language::JavaScript);
    }

    #[test]
    fn test_open_file_loads_content_and_language() {
        let mut session = Session::default();
        assert!(session.open_file(&id("file-2")));
        assert_eq!(session.language(), Language::Markdown);
        assert_eq!(session.buffer(), "# Project Documentation");
        assert_eq!(session.file_name(), "readme.md");
        assert_eq!(session.feedback().message, "readme.md file opened");

        assert!(!session.open_file(&id("folder-1")));
        assert_eq!(session.active_file(), Some(&id("file-2")));
    }

    #[test]
    fn test_edits_mirror_into_store_with_auto_save() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        session.edit_buffer("x = 2");
        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("x = 2")
        );
    }

    #[test]
    fn test_save_unchanged_only_logs_info() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        let banner_before = session.feedback().message.clone();

        assert!(!session.save());
        assert_eq!(session.console().last().unwrap().kind, ConsoleKind::Info);
        assert_eq!(texts(&session), ["No changes to save"]);
        assert_eq!(session.console().of_kind(ConsoleKind::Success).count(), 0);
        assert_eq!(session.feedback().message, banner_before);
    }

    #[test]
    fn test_save_changed_logs_success_and_banner() {
        let mut session = Session::default();
        session.settings_mut().auto_save = false;
        session.open_file(&id("file-1"));
        session.edit_buffer("print(\"changed\")");
        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("print(\"Hello, World!\")")
        );

        assert!(session.save());
        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("print(\"changed\")")
        );
        assert_eq!(texts(&session), ["untitled.py file saved successfully"]);
        assert_eq!(session.feedback().kind, FeedbackKind::Success);
        assert!(session.feedback().visible);
    }

    #[test]
    fn test_switching_files_keeps_unsaved_edits() {
        let mut session = Session::default();
        session.settings_mut().auto_save = false;
        session.open_file(&id("file-1"));
        session.edit_buffer("print(\"edited\")");

        session.open_file(&id("file-2"));
        session.open_file(&id("file-1"));
        assert_eq!(session.buffer(), "print(\"edited\")");
        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("print(\"edited\")")
        );
        // Written back silently
        assert_eq!(session.console().of_kind(ConsoleKind::Success).count(), 0);
    }

    #[test]
    fn test_creating_file_keeps_unsaved_edits() {
        let mut session = Session::default();
        session.settings_mut().auto_save = false;
        session.open_file(&id("file-1"));
        session.edit_buffer("x = 1");

        session.create_file(None).unwrap();
        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("x = 1")
        );
    }

    #[test]
    fn test_save_without_file_is_noop() {
        let mut session = Session::default();
        assert!(!session.save());
        assert!(session.console().is_empty());
    }

    #[test]
    fn test_create_file_opens_it_and_expands_parents() {
        let mut session = Session::default();
        let docs = id("folder-2");
        session.set_language(Language::TypeScript);

        let new_id = session.create_file(Some(&docs)).unwrap();
        assert_eq!(session.active_file(), Some(&new_id));
        assert_eq!(session.file_name(), "untitled.ts");
        assert_eq!(session.buffer(), Language::TypeScript.template());
        assert!(session.store().get(&docs).unwrap().is_open());
        assert_eq!(texts(&session), ["✨ New file untitled.ts created"]);
        assert_eq!(session.feedback().message, "New file untitled.ts created");
    }

    #[test]
    fn test_create_under_file_is_noop() {
        let mut session = Session::default();
        assert!(session.create_folder(Some(&id("file-1"))).is_none());
        assert!(session.create_file(Some(&id("ghost"))).is_none());
        assert!(session.console().is_empty());
    }

    #[test]
    fn test_create_folder() {
        let mut session = Session::default();
        session.create_folder(None).unwrap();
        session.create_folder(None).unwrap();
        assert_eq!(
            texts(&session),
            ["📁 New folder New Folder created", "📁 New folder New Folder 1 created"]
        );
    }

    #[test]
    fn test_delete_open_file_clears_editor() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));

        assert!(session.delete(&id("folder-1")));
        assert!(session.active_file().is_none());
        assert_eq!(session.buffer(), "");
        assert_eq!(session.file_name(), "");
        assert_eq!(texts(&session), ["Deleted: src"]);
        assert!(!session.delete(&id("folder-1")));
    }

    #[test]
    fn test_delete_other_entry_keeps_editor() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        session.delete(&id("folder-2"));
        assert_eq!(session.active_file(), Some(&id("file-1")));
    }

    #[test]
    fn test_rename_propagates_to_active_name() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));

        assert!(session.rename(&id("file-1"), "main"));
        assert_eq!(session.file_name(), "main.py");
        assert_eq!(texts(&session), ["untitled.py renamed to main"]);
        assert_eq!(session.feedback().kind, FeedbackKind::Success);

        assert!(!session.rename(&id("file-1"), "   "));
        assert!(!session.rename(&id("file-1"), "main.py"));
        assert!(!session.rename(&id("ghost"), "x"));
    }

    #[test]
    fn test_duplicate_logs() {
        let mut session = Session::default();
        let copy = session.duplicate(&id("file-1")).unwrap();
        assert_eq!(session.store().get(&copy).unwrap().name, "untitled-copy.py");
        assert_eq!(texts(&session), ["Duplicated file: untitled-copy.py"]);
        assert!(session.duplicate(&id("folder-1")).is_none());
    }

    #[test]
    fn test_copy_path() {
        let mut session = Session::default();
        assert_eq!(
            session.copy_path(&id("file-1")),
            Ok(Some("src/untitled.py".to_string()))
        );
        assert_eq!(texts(&session), ["Copied path: src/untitled.py"]);
        assert_eq!(session.copy_path(&id("ghost")), Ok(None));
    }

    #[test]
    fn test_copy_path_surfaces_cycle() {
        let mut session = Session::new(EntryStore::new(vec![
            Entry::folder("a", "a", Some(id("b")), true),
            Entry::folder("b", "b", Some(id("a")), true),
        ]));
        assert!(matches!(
            session.copy_path(&id("a")),
            Err(TreeError::Cycle(_))
        ));
    }

    #[test]
    fn test_toggle_folder_feedback() {
        let mut session = Session::default();
        assert_eq!(session.toggle_folder(&id("folder-1")), Some(false));
        assert_eq!(session.feedback().message, "src folder closed");
        assert_eq!(session.toggle_folder(&id("folder-1")), Some(true));
        assert_eq!(session.feedback().message, "src folder opened");
        assert_eq!(session.toggle_folder(&id("file-1")), None);
    }

    #[test]
    fn test_format_requires_file() {
        let mut session = Session::default();
        assert!(!session.format_code());
        session.open_file(&id("file-1"));
        assert!(session.format_code());
        assert_eq!(texts(&session), ["Code formatting completed"]);
    }

    #[test]
    fn test_feedback_supersedes_previous_ticket() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        let first = session.take_pending_dismiss().unwrap();
        session.toggle_folder(&id("folder-2"));
        let second = session.take_pending_dismiss().unwrap();
        assert!(session.take_pending_dismiss().is_none());

        assert!(!session.dismiss_feedback(first));
        assert!(session.feedback().visible);
        assert!(session.dismiss_feedback(second));
        assert!(!session.feedback().visible);
    }

    #[test]
    fn test_run_without_file() {
        let mut session = Session::default();
        assert!(session.begin_run().is_none());
        assert_eq!(texts(&session), [RUN_NO_FILE]);
        assert!(!session.is_running());
    }

    #[test]
    fn test_local_run_transcript_is_framed() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        session.edit_buffer("print(\"a\")\nprint(\"b\")");
        run_locally(&mut session);

        assert_eq!(
            texts(&session),
            [RUN_START_BANNER, "a\nb\n", RUN_END_BANNER]
        );
        assert!(!session.is_running());
    }

    #[test]
    fn test_run_saves_silently() {
        let mut session = Session::default();
        session.settings_mut().auto_save = false;
        session.open_file(&id("file-1"));
        session.edit_buffer("print(1)");
        run_locally(&mut session);

        assert_eq!(
            session.store().get(&id("file-1")).unwrap().content(),
            Some("print(1)")
        );
        assert_eq!(session.console().of_kind(ConsoleKind::Success).count(), 0);
    }

    #[test]
    fn test_simulation_error_becomes_error_line() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        session.edit_buffer("syntax error");
        run_locally(&mut session);

        assert_eq!(
            texts(&session),
            [RUN_START_BANNER, "SyntaxError: invalid syntax", RUN_END_BANNER]
        );
        assert_eq!(session.console().entries()[1].kind, ConsoleKind::Error);
    }

    #[test]
    fn test_overlapping_run_rejected() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        let _plan = session.begin_run().unwrap();

        assert!(session.begin_run().is_none());
        assert_eq!(session.console().last().unwrap().text, RUN_BUSY);
        assert!(session.is_running());
    }

    #[test]
    fn test_runner_ready_routes_supported_languages() {
        let mut session = Session::default();
        session.runner_ready(vec![Language::Python, Language::JavaScript]);
        assert_eq!(
            texts(&session),
            ["Code execution environment is ready. Supported languages: python, javascript"]
        );

        session.open_file(&id("file-1"));
        let plan = session.begin_run().unwrap();
        assert_eq!(plan.mode, RunMode::Runner);
        assert_eq!(session.console().last().unwrap().text, "Running Python code...");
        session.finish_run(Ok(Transcript::new("x\n")));

        // Markdown is not in the runner's set
        session.open_file(&id("file-2"));
        assert_eq!(session.begin_run().unwrap().mode, RunMode::Local);
    }

    #[test]
    fn test_runner_failure_falls_back_to_local() {
        let mut session = Session::default();
        session.runner_failed(&RunnerError::Unreachable("offline".into()));
        assert_eq!(session.runner(), &RunnerStatus::Unavailable);
        assert_eq!(session.console().last().unwrap().kind, ConsoleKind::Error);
        assert_eq!(texts(&session), [RUNNER_INIT_FAILED]);

        session.open_file(&id("file-1"));
        assert_eq!(session.begin_run().unwrap().mode, RunMode::Local);
    }

    #[test]
    fn test_preview_requires_toggle_and_file() {
        let mut session = Session::default();
        session.toggle_preview();
        assert!(session.preview().is_none());

        session.open_file(&id("file-2"));
        assert!(matches!(session.preview(), Some(Preview::Markdown(_))));

        session.toggle_preview();
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_dispatch_shortcuts() {
        let mut session = Session::default();
        assert_eq!(session.dispatch_shortcut("Ctrl+Q"), ShortcutOutcome::Unbound);
        assert_eq!(session.dispatch_shortcut("F5"), ShortcutOutcome::RunRequested);
        assert_eq!(
            session.dispatch_shortcut("Ctrl+`"),
            ShortcutOutcome::Applied(ShortcutAction::ToggleConsole)
        );
        assert!(session.console_minimized());
        assert_eq!(
            session.dispatch_shortcut("Ctrl+F"),
            ShortcutOutcome::Widget(ShortcutAction::Find)
        );

        assert_eq!(
            session.dispatch_shortcut("Ctrl+N"),
            ShortcutOutcome::Applied(ShortcutAction::NewFile)
        );
        assert!(session.active_file().is_some());
        assert_eq!(
            session.dispatch_shortcut("Shift+Alt+F"),
            ShortcutOutcome::FormatRequested
        );
    }

    #[test]
    fn test_rebinding_through_session() {
        let mut session = Session::default();
        assert!(!session.begin_shortcut_edit("find"));
        assert_eq!(session.console().last().unwrap().kind, ConsoleKind::Error);

        assert!(session.begin_shortcut_edit("run"));
        assert_eq!(session.dispatch_shortcut("Ctrl+R"), ShortcutOutcome::Captured);
        assert!(session.commit_shortcut_edit());
        assert_eq!(session.console().last().unwrap().text, "Run shortcut set to Ctrl+R");
        assert_eq!(session.dispatch_shortcut("Ctrl+R"), ShortcutOutcome::RunRequested);
        assert_eq!(session.dispatch_shortcut("F5"), ShortcutOutcome::Unbound);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::default();
        session.open_file(&id("file-1"));
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["activeFile"], "file-1");
        assert_eq!(json["fileName"], "untitled.py");
        assert_eq!(json["runner"]["state"], "pending");
        assert_eq!(json["widgetLanguage"], "python");
        assert_eq!(json["rows"][0]["entry"]["name"], "src");
        assert_eq!(json["entries"].as_array().unwrap().len(), 4);
    }
}
