//! JavaScript embedding.
//!
//! Exposes [`EditorHandle`] to the host page. The page renders from
//! [`EditorHandle::snapshot`] and forwards widget events and menu actions
//! back in; clipboard, confirm and prompt stay on the JavaScript side.

use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::app::AppContext;
use crate::core::Session;
use crate::core::engine::SimulatedRunner;
use crate::models::{EditorSettings, EntryId, Language};
use crate::utils::timer;

#[wasm_bindgen(start)]
pub fn start() {
    // Logging and panic hooks for the browser console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}

/// Session handle owned by the host page.
#[wasm_bindgen]
pub struct EditorHandle {
    ctx: AppContext,
}

#[wasm_bindgen]
impl EditorHandle {
    /// Create a session over the sample tree and start connecting the runner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> EditorHandle {
        let ctx = AppContext::new(Session::default());
        let runner_ctx = ctx.clone();
        timer::spawn_local(async move {
            runner_ctx.init_runner(&SimulatedRunner::default()).await;
        });
        EditorHandle { ctx }
    }

    /// Full session state as plain JSON-compatible objects.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        self.ctx.read(|s| to_js(&s.snapshot()))
    }

    /// Options payload for the widget's `updateOptions`.
    #[wasm_bindgen(js_name = widgetOptions)]
    pub fn widget_options(&self) -> Result<JsValue, JsValue> {
        self.ctx.read(|s| to_js(&s.settings().widget_options()))
    }

    #[wasm_bindgen(js_name = updateSettings)]
    pub fn update_settings(&self, settings: JsValue) -> Result<(), JsValue> {
        let mut settings: EditorSettings = serde_wasm_bindgen::from_value(settings)?;
        settings.set_font_size(settings.font_size);
        self.ctx.update(|s| *s.settings_mut() = settings);
        Ok(())
    }

    /// Switch language by tag or label. Returns `false` for unknown names.
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, name: &str) -> bool {
        match Language::from_tag(name) {
            Some(language) => {
                self.ctx.update(|s| s.set_language(language));
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = editBuffer)]
    pub fn edit_buffer(&self, text: String) {
        self.ctx.update(|s| s.edit_buffer(text));
    }

    pub fn save(&self) -> bool {
        self.ctx.update(Session::save)
    }

    #[wasm_bindgen(js_name = openFile)]
    pub fn open_file(&self, id: &str) -> bool {
        self.ctx.update(|s| s.open_file(&EntryId::from(id)))
    }

    #[wasm_bindgen(js_name = toggleFolder)]
    pub fn toggle_folder(&self, id: &str) -> Option<bool> {
        self.ctx.update(|s| s.toggle_folder(&EntryId::from(id)))
    }

    #[wasm_bindgen(js_name = createFile)]
    pub fn create_file(&self, parent: Option<String>) -> Option<String> {
        let parent = parent.map(EntryId::new);
        self.ctx
            .update(|s| s.create_file(parent.as_ref()))
            .map(|id| id.to_string())
    }

    #[wasm_bindgen(js_name = createFolder)]
    pub fn create_folder(&self, parent: Option<String>) -> Option<String> {
        let parent = parent.map(EntryId::new);
        self.ctx
            .update(|s| s.create_folder(parent.as_ref()))
            .map(|id| id.to_string())
    }

    /// Delete after the host has confirmed with the user.
    pub fn delete(&self, id: &str) -> bool {
        self.ctx.update(|s| s.delete(&EntryId::from(id)))
    }

    pub fn rename(&self, id: &str, new_name: &str) -> bool {
        self.ctx.update(|s| s.rename(&EntryId::from(id), new_name))
    }

    pub fn duplicate(&self, id: &str) -> Option<String> {
        self.ctx
            .update(|s| s.duplicate(&EntryId::from(id)))
            .map(|id| id.to_string())
    }

    /// Path for the clipboard. Throws if the tree is corrupted.
    #[wasm_bindgen(js_name = copyPath)]
    pub fn copy_path(&self, id: &str) -> Result<Option<String>, JsError> {
        self.ctx
            .update(|s| s.copy_path(&EntryId::from(id)))
            .map_err(JsError::from)
    }

    #[wasm_bindgen(js_name = formatCode)]
    pub fn format_code(&self) -> bool {
        self.ctx.update(Session::format_code)
    }

    #[wasm_bindgen(js_name = toggleConsole)]
    pub fn toggle_console(&self) -> bool {
        self.ctx.update(Session::toggle_console)
    }

    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&self) -> bool {
        self.ctx.update(Session::toggle_preview)
    }

    #[wasm_bindgen(js_name = beginShortcutEdit)]
    pub fn begin_shortcut_edit(&self, id: &str) -> bool {
        self.ctx.update(|s| s.begin_shortcut_edit(id))
    }

    #[wasm_bindgen(js_name = commitShortcutEdit)]
    pub fn commit_shortcut_edit(&self) -> bool {
        self.ctx.update(Session::commit_shortcut_edit)
    }

    #[wasm_bindgen(js_name = cancelShortcutEdit)]
    pub fn cancel_shortcut_edit(&self) {
        self.ctx.update(Session::cancel_shortcut_edit);
    }

    /// Resolves to `false` when the run was refused.
    pub fn run(&self) -> Promise {
        let ctx = self.ctx.clone();
        future_to_promise(async move { Ok(JsValue::from_bool(ctx.run().await)) })
    }

    /// Resolves to the dispatch outcome for the host to act on.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&self, combo: String) -> Promise {
        let ctx = self.ctx.clone();
        future_to_promise(async move {
            let outcome = ctx.handle_key(&combo).await;
            to_js(&outcome)
        })
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}
