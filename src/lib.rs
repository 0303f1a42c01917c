//! Employee Roster - browser employee list with LocalStorage persistence
//!
//! Core modules:
//! - `store`: The employee collection (add/update/remove + change listeners)
//! - `i18n`: Translation lookup and runtime language switching
//! - `persistence`: Key/value storage seam and JSON helpers
//! - `platform`: Browser/native platform abstraction
//! - `validation`: Add/edit form checks
//! - `roster`: Composition root wiring the above together

pub mod employee;
pub mod i18n;
pub mod persistence;
pub mod platform;
pub mod roster;
pub mod settings;
pub mod store;
pub mod subscribers;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use employee::{Employee, EmployeeDraft, EmployeePatch, Position};
pub use i18n::{Language, Translator};
pub use persistence::{KeyValueStore, MemoryStorage};
pub use roster::Roster;
pub use settings::{Settings, ViewMode};
pub use store::EmployeeStore;
pub use subscribers::SubscriptionId;
