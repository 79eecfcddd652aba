#![forbid(unsafe_code)]

//! Unique identifiers for pairing rendered inputs with their labels.
//!
//! Generators are injected, never global. Share one `Rc<dyn IdGenerator>`
//! between controls when ids must be unique across them.

use std::cell::Cell;

/// Produces a fresh identifier for a namespace.
pub trait IdGenerator {
    /// Return an id that this generator has never returned before.
    fn unique_id(&self, namespace: &str) -> String;
}

impl<F: Fn(&str) -> String> IdGenerator for F {
    fn unique_id(&self, namespace: &str) -> String {
        self(namespace)
    }
}

/// Counter-based generator: `"{namespace}{n}"` with `n` starting at 1.
///
/// One counter serves every namespace.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

impl IdGenerator for SequentialIds {
    fn unique_id(&self, namespace: &str) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("{namespace}{next}")
    }
}
