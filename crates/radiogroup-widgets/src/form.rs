#![forbid(unsafe_code)]

//! Parent aggregation.
//!
//! A control configured with a [`FormParent`] calls
//! [`FormParent::update`] after every effective value change, passing
//! itself as a [`FormControl`]. [`FormData`] is a ready-made parent that
//! keeps the latest snapshot of each control by name.

use std::cell::{Cell, RefCell};

use crate::value::Selection;

/// Read-only view of a control, as seen by its parent.
pub trait FormControl {
    fn name(&self) -> String;
    fn value(&self) -> Selection;
    fn is_valid(&self) -> bool;
}

/// Receives change notifications from child controls.
pub trait FormParent {
    fn update(&self, control: &dyn FormControl);
}

/// Snapshot of one control at its last notification.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub name: String,
    pub value: Selection,
    pub valid: bool,
}

/// Aggregator recording the latest snapshot per control name.
///
/// Fields keep the order in which their controls first reported.
#[derive(Debug, Default)]
pub struct FormData {
    fields: RefCell<Vec<FieldSnapshot>>,
    updates: Cell<usize>,
}

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FieldSnapshot> {
        self.fields.borrow().iter().find(|f| f.name == name).cloned()
    }

    #[must_use]
    pub fn fields(&self) -> Vec<FieldSnapshot> {
        self.fields.borrow().clone()
    }

    /// Total notifications received.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.get()
    }

    /// `true` when every reported control was valid at its last update.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.borrow().iter().all(|f| f.valid)
    }
}

impl FormParent for FormData {
    fn update(&self, control: &dyn FormControl) {
        let snapshot = FieldSnapshot {
            name: control.name(),
            value: control.value(),
            valid: control.is_valid(),
        };
        self.updates.set(self.updates.get() + 1);
        let mut fields = self.fields.borrow_mut();
        match fields.iter().position(|f| f.name == snapshot.name) {
            Some(idx) => fields[idx] = snapshot,
            None => fields.push(snapshot),
        }
    }
}
