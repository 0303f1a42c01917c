//! Composition root
//!
//! Builds the store, translator and settings against one storage handle.
//! Consumers get the `Roster` (or its parts) passed in; nothing is global.

use std::rc::Rc;

use crate::i18n::Translator;
use crate::persistence::KeyValueStore;
use crate::settings::{Settings, ViewMode};
use crate::store::EmployeeStore;
use crate::validation::{EmployeeForm, FieldError};

pub struct Roster {
    pub store: EmployeeStore,
    pub i18n: Translator,
    pub settings: Settings,
    storage: Rc<dyn KeyValueStore>,
}

impl Roster {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let store = EmployeeStore::load(storage.clone());
        let i18n = Translator::load(storage.clone());
        let settings = Settings::load(storage.as_ref());
        Self {
            store,
            i18n,
            settings,
            storage,
        }
    }

    /// Add-form submit: validate, then add with the next free id.
    /// `Ok(None)` when the store refused the add (no id left).
    pub fn submit_new(&mut self, form: &EmployeeForm) -> Result<Option<u32>, Vec<FieldError>> {
        let draft = form.validate()?;
        Ok(self.store.add(draft))
    }

    /// Edit-form submit: validate, then overwrite every field of `id`
    pub fn submit_edit(&mut self, id: u32, form: &EmployeeForm) -> Result<(), Vec<FieldError>> {
        let draft = form.validate()?;
        self.store.update(id, &draft.into());
        Ok(())
    }

    /// Flip table/grid and persist the choice
    pub fn toggle_view(&mut self) -> ViewMode {
        let mode = self.settings.toggle_view();
        self.settings.save(self.storage.as_ref());
        mode
    }

    pub fn into_parts(self) -> (EmployeeStore, Translator, Settings, Rc<dyn KeyValueStore>) {
        (self.store, self.i18n, self.settings, self.storage)
    }
}
