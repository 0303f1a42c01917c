//! Employee store
//!
//! Owns the roster. Every mutation writes the whole collection back to
//! storage and then hands the new collection to every subscriber, in
//! registration order, before returning.

use std::rc::Rc;

use crate::employee::{Employee, EmployeeDraft, EmployeePatch, seed_employees};
use crate::persistence::{self, KeyValueStore, LoadError};
use crate::subscribers::{SubscriptionId, Subscribers};

pub struct EmployeeStore {
    employees: Vec<Employee>,
    storage: Rc<dyn KeyValueStore>,
    subscribers: Subscribers<[Employee]>,
}

impl EmployeeStore {
    /// LocalStorage key holding the JSON array
    pub const STORAGE_KEY: &'static str = "employees";

    /// Load the persisted roster, or the seed roster if nothing usable is stored
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let employees = match Self::load_persisted(storage.as_ref()) {
            Ok(employees) => {
                log::info!("Loaded {} employees", employees.len());
                employees
            }
            Err(LoadError::Missing(_)) => {
                log::info!("No saved roster, using seed data");
                seed_employees()
            }
            Err(e) => {
                log::warn!("Discarding saved roster: {e}");
                seed_employees()
            }
        };

        Self::with_employees(storage, employees)
    }

    /// Read the stored collection without any fallback
    pub fn load_persisted(storage: &dyn KeyValueStore) -> Result<Vec<Employee>, LoadError> {
        persistence::load_json(storage, Self::STORAGE_KEY)
    }

    /// Start from a given collection (nothing is written until the first mutation)
    pub fn with_employees(storage: Rc<dyn KeyValueStore>, employees: Vec<Employee>) -> Self {
        Self {
            employees,
            storage,
            subscribers: Subscribers::new(),
        }
    }

    /// Read-only view of the current collection
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// `max(id) + 1`, or 1 for an empty roster. `None` once `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<u32> {
        match self.employees.iter().map(|e| e.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a record. Returns the id it was stored under.
    ///
    /// A draft without an id, or with an id already in use, gets
    /// [`next_id`](Self::next_id). When no id is left the add is refused:
    /// nothing is written, no one is notified and `None` comes back.
    /// No field validation happens here.
    pub fn add(&mut self, draft: EmployeeDraft) -> Option<u32> {
        let id = match draft.id {
            Some(id) if self.get(id).is_none() => Some(id),
            Some(taken) => {
                log::warn!("Employee id {taken} is taken, assigning a new one");
                self.next_id()
            }
            None => self.next_id(),
        };
        let Some(id) = id else {
            log::warn!("No employee id left after {}, add refused", u32::MAX);
            return None;
        };

        let employee = draft.into_employee(id);
        log::info!("Adding employee {} ({})", id, employee.full_name());
        self.employees.push(employee);
        self.commit();
        Some(id)
    }

    /// Drop the record with `id`. Unknown ids leave the data untouched but
    /// subscribers are still notified.
    pub fn remove(&mut self, id: u32) {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        if self.employees.len() == before {
            log::debug!("remove: no employee {id}");
        } else {
            log::info!("Removed employee {id}");
        }
        self.commit();
    }

    /// Merge `patch` into the record with `id`. Unknown ids are a no-op on
    /// the data.
    pub fn update(&mut self, id: u32, patch: &EmployeePatch) {
        match self.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.apply(patch);
                log::info!("Updated employee {id}");
            }
            None => log::debug!("update: no employee {id}"),
        }
        self.commit();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Employee]) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Persist, then notify
    fn commit(&mut self) {
        if let Err(e) = persistence::save_json(
            self.storage.as_ref(),
            Self::STORAGE_KEY,
            &self.employees,
        ) {
            log::warn!("Roster not saved: {e}");
        }

        log::debug!(
            "Notifying {} subscribers ({} employees)",
            self.subscribers.len(),
            self.employees.len()
        );
        self.subscribers.notify(&self.employees);
    }
}

impl std::fmt::Debug for EmployeeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("employees", &self.employees.len())
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
