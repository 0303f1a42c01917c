//! JavaScript facade (WASM only)
//!
//! The page's components talk to the roster through [`RosterHandle`]. Values
//! cross the boundary as JSON, so listeners always receive copies.
//!
//! Store, translator and settings sit in separate cells: a language listener
//! may read the roster and a roster listener may translate. Calling back into
//! the cell that is currently notifying returns an error instead of panicking.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::employee::{EmployeeDraft, EmployeePatch};
use crate::i18n::{Language, Translator};
use crate::persistence::KeyValueStore;
use crate::platform;
use crate::roster::Roster;
use crate::settings::Settings;
use crate::store::EmployeeStore;
use crate::subscribers::SubscriptionId;
use crate::validation::{EmployeeForm, Field};

/// DOM event the header dispatches with `{ detail: { language } }`
const LANGUAGE_CHANGE_EVENT: &str = "language-change";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already installed (module re-initialized)
        return;
    }
    log::info!("Employee roster module loaded");
}

fn js_error(err: JsValue) -> JsError {
    JsError::new(&err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn busy(what: &str) -> JsError {
    JsError::new(&format!("{what} is busy; read it from the listener argument instead"))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, JsError> {
    let json = js_sys::JSON::stringify(value)
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| JsError::new("expected an object"))?;
    serde_json::from_str(&json).map_err(|e| JsError::new(&e.to_string()))
}

/// One rejected form field, with its message in the current language
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldIssue {
    field: Field,
    message_key: &'static str,
    message: String,
}

#[wasm_bindgen]
pub struct RosterHandle {
    store: Rc<RefCell<EmployeeStore>>,
    i18n: Rc<RefCell<Translator>>,
    settings: Rc<RefCell<Settings>>,
    storage: Rc<dyn KeyValueStore>,
}

#[wasm_bindgen]
impl RosterHandle {
    /// Load everything from LocalStorage and start listening for
    /// `language-change` events on the document
    #[wasm_bindgen(constructor)]
    pub fn new() -> RosterHandle {
        let (store, i18n, settings, storage) = Roster::new(platform::default_storage()).into_parts();
        let handle = RosterHandle {
            store: Rc::new(RefCell::new(store)),
            i18n: Rc::new(RefCell::new(i18n)),
            settings: Rc::new(RefCell::new(settings)),
            storage,
        };
        handle.listen_for_language_events();
        handle
    }

    // === Employees ===

    /// Copy of the current roster as an array of plain objects
    pub fn employees(&self) -> Result<JsValue, JsError> {
        let store = self.store.try_borrow().map_err(|_| busy("roster"))?;
        to_js(store.employees())
    }

    /// `undefined` once every id is taken
    #[wasm_bindgen(js_name = nextId)]
    pub fn next_id(&self) -> Result<Option<u32>, JsError> {
        let store = self.store.try_borrow().map_err(|_| busy("roster"))?;
        Ok(store.next_id())
    }

    /// Add a record; an absent or taken `id` gets the next free one. Returns
    /// the id, or `undefined` if the store refused the add.
    #[wasm_bindgen(js_name = addEmployee)]
    pub fn add_employee(&self, record: JsValue) -> Result<Option<u32>, JsError> {
        let draft: EmployeeDraft = from_js(&record)?;
        let mut store = self.store.try_borrow_mut().map_err(|_| busy("roster"))?;
        Ok(store.add(draft))
    }

    #[wasm_bindgen(js_name = updateEmployee)]
    pub fn update_employee(&self, id: u32, fields: JsValue) -> Result<(), JsError> {
        let patch: EmployeePatch = from_js(&fields)?;
        let mut store = self.store.try_borrow_mut().map_err(|_| busy("roster"))?;
        store.update(id, &patch);
        Ok(())
    }

    #[wasm_bindgen(js_name = removeEmployee)]
    pub fn remove_employee(&self, id: u32) -> Result<(), JsError> {
        let mut store = self.store.try_borrow_mut().map_err(|_| busy("roster"))?;
        store.remove(id);
        Ok(())
    }

    /// `callback(employees)` after every change. Returns the unsubscribe token.
    pub fn subscribe(&self, callback: js_sys::Function) -> Result<u32, JsError> {
        let mut store = self.store.try_borrow_mut().map_err(|_| busy("roster"))?;
        let id = store.subscribe(move |employees| {
            let result = to_js(employees)
                .map_err(JsValue::from)
                .and_then(|snapshot| callback.call1(&JsValue::NULL, &snapshot));
            if let Err(e) = result {
                log::warn!("Roster listener failed: {e:?}");
            }
        });
        Ok(id.as_u32())
    }

    pub fn unsubscribe(&self, token: u32) -> Result<bool, JsError> {
        let mut store = self.store.try_borrow_mut().map_err(|_| busy("roster"))?;
        Ok(store.unsubscribe(SubscriptionId::from_u32(token)))
    }

    // === Translation ===

    pub fn translate(&self, key: &str) -> Result<String, JsError> {
        let i18n = self.i18n.try_borrow().map_err(|_| busy("translator"))?;
        Ok(i18n.translate(key).to_string())
    }

    pub fn t(&self, key: &str) -> Result<String, JsError> {
        self.translate(key)
    }

    pub fn language(&self) -> Result<String, JsError> {
        let i18n = self.i18n.try_borrow().map_err(|_| busy("translator"))?;
        Ok(i18n.current_language().code().to_string())
    }

    /// `[{ code, name }]` for the language picker
    pub fn languages(&self) -> Result<JsValue, JsError> {
        let list: Vec<_> = Language::ALL
            .iter()
            .map(|l| serde_json::json!({ "code": l.code(), "name": l.native_name() }))
            .collect();
        to_js(&list)
    }

    /// Returns false (and changes nothing) for unsupported codes
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, code: &str) -> Result<bool, JsError> {
        let mut i18n = self.i18n.try_borrow_mut().map_err(|_| busy("translator"))?;
        Ok(i18n.set_language(code))
    }

    /// `callback(code)` after every language switch
    #[wasm_bindgen(js_name = onLanguageChange)]
    pub fn on_language_change(&self, callback: js_sys::Function) -> Result<u32, JsError> {
        let mut i18n = self.i18n.try_borrow_mut().map_err(|_| busy("translator"))?;
        let id = i18n.subscribe(move |language| {
            let code = JsValue::from_str(language.code());
            if let Err(e) = callback.call1(&JsValue::NULL, &code) {
                log::warn!("Language listener failed: {e:?}");
            }
        });
        Ok(id.as_u32())
    }

    #[wasm_bindgen(js_name = offLanguageChange)]
    pub fn off_language_change(&self, token: u32) -> Result<bool, JsError> {
        let mut i18n = self.i18n.try_borrow_mut().map_err(|_| busy("translator"))?;
        Ok(i18n.unsubscribe(SubscriptionId::from_u32(token)))
    }

    // === Form ===

    /// `[]` when the form is valid, otherwise one `{ field, messageKey, message }`
    /// per failing field
    #[wasm_bindgen(js_name = validateForm)]
    pub fn validate_form(&self, form: JsValue) -> Result<JsValue, JsError> {
        let form: EmployeeForm = from_js(&form)?;
        let i18n = self.i18n.try_borrow().map_err(|_| busy("translator"))?;
        let issues: Vec<FieldIssue> = match form.validate() {
            Ok(_) => Vec::new(),
            Err(errors) => errors
                .iter()
                .map(|e| FieldIssue {
                    field: e.field(),
                    message_key: e.message_key(),
                    message: i18n.translate(e.message_key()).to_string(),
                })
                .collect(),
        };
        to_js(&issues)
    }

    // === View ===

    #[wasm_bindgen(js_name = viewMode)]
    pub fn view_mode(&self) -> Result<String, JsError> {
        let settings = self.settings.try_borrow().map_err(|_| busy("settings"))?;
        Ok(settings.view_mode.as_str().to_string())
    }

    /// Translated label of the mode the toggle button switches to
    #[wasm_bindgen(js_name = viewToggleLabel)]
    pub fn view_toggle_label(&self) -> Result<String, JsError> {
        let settings = self.settings.try_borrow().map_err(|_| busy("settings"))?;
        let i18n = self.i18n.try_borrow().map_err(|_| busy("translator"))?;
        Ok(i18n.translate(settings.view_mode.toggled().label_key()).to_string())
    }

    /// Flip table/grid, persist, and return the new mode
    #[wasm_bindgen(js_name = toggleView)]
    pub fn toggle_view(&self) -> Result<String, JsError> {
        let mut settings = self.settings.try_borrow_mut().map_err(|_| busy("settings"))?;
        let mode = settings.toggle_view();
        settings.save(self.storage.as_ref());
        Ok(mode.as_str().to_string())
    }
}

impl RosterHandle {
    fn listen_for_language_events(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document, {LANGUAGE_CHANGE_EVENT} events will be ignored");
            return;
        };

        let i18n = self.i18n.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<web_sys::CustomEvent>() else {
                return;
            };
            let code = js_sys::Reflect::get(&event.detail(), &JsValue::from_str("language"))
                .ok()
                .and_then(|v| v.as_string());
            match (code, i18n.try_borrow_mut()) {
                (Some(code), Ok(mut i18n)) => {
                    i18n.set_language(&code);
                }
                (None, _) => log::warn!("{LANGUAGE_CHANGE_EVENT} without detail.language"),
                (_, Err(_)) => log::warn!("{LANGUAGE_CHANGE_EVENT} dispatched from a language listener"),
            }
        });
        if let Err(e) = document
            .add_event_listener_with_callback(LANGUAGE_CHANGE_EVENT, closure.as_ref().unchecked_ref())
        {
            log::warn!("Could not listen for {LANGUAGE_CHANGE_EVENT}: {e:?}");
        }
        closure.forget();
    }
}

impl Default for RosterHandle {
    fn default() -> Self {
        Self::new()
    }
}
