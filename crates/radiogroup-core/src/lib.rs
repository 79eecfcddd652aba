#![forbid(unsafe_code)]

//! Core: option values, records, live collections, and id generation.

pub mod collection;
pub mod id_gen;
pub mod logging;
pub mod record;
pub mod scalar;

pub use collection::{LiveCollection, Subscription};
pub use id_gen::{IdGenerator, SequentialIds};
pub use record::{Record, RecordRef};
pub use scalar::Scalar;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
