#![forbid(unsafe_code)]

//! Live, observable record collections.
//!
//! A [`LiveCollection`] is an ordered sequence of shared [`Record`]s that
//! other components may observe. Observers register with
//! [`LiveCollection::on_add`] and receive every record appended afterwards.
//!
//! # Architecture
//!
//! The collection is a cheap clonable handle over `Rc` state; clones share
//! records and listeners. Listeners are stored as `Weak` callbacks. The
//! returned [`Subscription`] owns the only strong reference, so dropping or
//! cancelling it disconnects the observer; dead entries are pruned lazily on
//! the next notification.
//!
//! # Invariants
//!
//! 1. Records keep insertion order.
//! 2. Membership is pointer identity, never structural equality.
//! 3. Listeners are notified in registration order, after the record is
//!    visible through the collection.
//! 4. No collection borrow is held while a listener runs, so listeners may
//!    read the collection or subscribe again.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::record::{Record, RecordRef};
use crate::scalar::Scalar;

type AddListener = dyn Fn(&RecordRef);

struct Inner {
    records: RefCell<Vec<RecordRef>>,
    main_index: Option<String>,
    listeners: RefCell<Vec<Weak<AddListener>>>,
}

/// Shared, observable, ordered collection of records.
#[derive(Clone)]
pub struct LiveCollection {
    inner: Rc<Inner>,
}

impl Default for LiveCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LiveCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveCollection")
            .field("len", &self.len())
            .field("main_index", &self.inner.main_index)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl LiveCollection {
    /// Create an empty collection without a declared primary index.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None, Vec::new())
    }

    /// Create an empty collection whose records are keyed by `field`.
    #[must_use]
    pub fn with_main_index(field: impl Into<String>) -> Self {
        Self::build(Some(field.into()), Vec::new())
    }

    /// Create a collection pre-filled with `records` (no notifications).
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self::build(None, records.into_iter().map(Rc::new).collect())
    }

    /// Same as [`from_records`](Self::from_records) with a primary index.
    #[must_use]
    pub fn from_records_indexed(
        field: impl Into<String>,
        records: impl IntoIterator<Item = Record>,
    ) -> Self {
        Self::build(Some(field.into()), records.into_iter().map(Rc::new).collect())
    }

    fn build(main_index: Option<String>, records: Vec<RecordRef>) -> Self {
        Self {
            inner: Rc::new(Inner {
                records: RefCell::new(records),
                main_index,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The declared primary-index field, if any.
    #[must_use]
    pub fn main_index(&self) -> Option<&str> {
        self.inner.main_index.as_deref()
    }

    /// Append a record and notify listeners.
    pub fn add(&self, record: Record) -> RecordRef {
        self.add_ref(Rc::new(record))
    }

    /// Append an existing shared record and notify listeners.
    ///
    /// Adding a record that is already a member is a no-op.
    pub fn add_ref(&self, record: RecordRef) -> RecordRef {
        if self.contains(&record) {
            return record;
        }
        self.inner.records.borrow_mut().push(Rc::clone(&record));
        crate::trace!(len = self.len(), "collection record added");
        self.notify_added(&record);
        record
    }

    /// Remove a record by identity. Returns `true` if it was a member.
    pub fn remove(&self, record: &RecordRef) -> bool {
        let mut records = self.inner.records.borrow_mut();
        match records.iter().position(|r| Rc::ptr_eq(r, record)) {
            Some(idx) => {
                records.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.records.borrow().is_empty()
    }

    /// Identity membership test.
    #[must_use]
    pub fn contains(&self, record: &RecordRef) -> bool {
        self.position(record).is_some()
    }

    /// Index of `record` by identity.
    #[must_use]
    pub fn position(&self, record: &RecordRef) -> Option<usize> {
        self.inner
            .records
            .borrow()
            .iter()
            .position(|r| Rc::ptr_eq(r, record))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<RecordRef> {
        self.inner.records.borrow().get(index).cloned()
    }

    /// First record (in collection order) whose `field` flexibly equals `key`.
    ///
    /// Records without the field never match.
    #[must_use]
    pub fn find_by(&self, field: &str, key: &Scalar) -> Option<RecordRef> {
        self.inner
            .records
            .borrow()
            .iter()
            .find(|r| r.get(field).is_some_and(|v| v.flex_eq(key)))
            .cloned()
    }

    /// Lookup by the declared primary index, falling back to `"id"`.
    #[must_use]
    pub fn get_by_id(&self, key: &Scalar) -> Option<RecordRef> {
        self.find_by(self.main_index().unwrap_or("id"), key)
    }

    /// Snapshot of the records in order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordRef> {
        self.inner.records.borrow().clone()
    }

    /// Whether two handles share the same underlying collection.
    #[must_use]
    pub fn same_collection(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Register a listener for appended records.
    ///
    /// The listener stays connected while the returned [`Subscription`] lives.
    #[must_use = "dropping the subscription disconnects the listener"]
    pub fn on_add(&self, listener: impl Fn(&RecordRef) + 'static) -> Subscription {
        let listener: Rc<AddListener> = Rc::new(listener);
        self.inner
            .listeners
            .borrow_mut()
            .push(Rc::downgrade(&listener));
        Subscription {
            listener: Some(listener),
        }
    }

    /// Number of connected listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn notify_added(&self, record: &RecordRef) {
        let live: Vec<Rc<AddListener>> = {
            let mut listeners = self.inner.listeners.borrow_mut();
            listeners.retain(|w| w.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in live {
            listener(record);
        }
    }
}

/// RAII guard for a collection listener.
pub struct Subscription {
    listener: Option<Rc<AddListener>>,
}

impl Subscription {
    /// Disconnect now instead of on drop.
    pub fn cancel(&mut self) {
        self.listener = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
