//! Persistence layer: a single key-value slot holding the session record.

mod error;
mod json;
mod record;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use record::{STORAGE_KEY, SessionRecord};

/// Capability the application depends on for persistence.
///
/// The store is a single synchronous slot: `load` reads the whole record
/// (or the default when absent) and `save` replaces it wholesale.
pub trait Store {
    /// Reads the persisted record, or the default record if the slot is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the slot exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<SessionRecord, StoreError>;

    /// Writes the record back to the slot, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the slot cannot be written.
    fn save(&self, record: &SessionRecord) -> Result<(), StoreError>;
}
