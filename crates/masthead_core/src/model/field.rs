//! Write-once field state.

use crate::model::validation::{FieldName, ValidationError};

/// Field that accepts exactly one valid assignment.
///
/// Starts unset. Invalid assignments leave it unset; once a value is stored,
/// or the field is closed, every later assignment is rejected with
/// `ValidationError::Locked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOnce<T> {
    value: Option<T>,
    field: FieldName,
    closed: bool,
}

impl<T> WriteOnce<T> {
    pub fn unset(field: FieldName) -> Self {
        Self {
            value: None,
            field,
            closed: false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Rejects all further assignments, even while no value is stored.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_locked(&self) -> bool {
        self.closed || self.value.is_some()
    }

    /// Stores `value` when nothing valid is stored yet and `check` accepts it.
    pub fn assign(
        &mut self,
        value: T,
        check: impl FnOnce(&T) -> Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        if self.is_locked() {
            return Err(ValidationError::Locked { field: self.field });
        }
        check(&value)?;
        self.value = Some(value);
        Ok(())
    }
}
