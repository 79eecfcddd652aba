#![forbid(unsafe_code)]

//! Radio group public facade crate.
//!
//! Re-exports the option model from `radiogroup-core` and the controller
//! from `radiogroup-widgets`, plus a prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use radiogroup_core::{
    IdGenerator, LiveCollection, Record, RecordRef, Scalar, SequentialIds, Subscription,
};

#[cfg(feature = "tracing-json")]
pub use radiogroup_core::logging::init_json_subscriber;

// --- Widget re-exports -----------------------------------------------------

pub use radiogroup_widgets::{
    ChoiceSurface, FieldSnapshot, FormControl, FormData, FormParent, HeadlessSurface,
    OptionItem, OptionSource, RadioConfig, RadioError, RadioGroup, RenderedChoice, Result,
    Selection, SelectionState, Value,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ChoiceSurface, FormData, HeadlessSurface, LiveCollection, OptionItem, OptionSource,
        RadioConfig, RadioError, RadioGroup, Record, Result, Scalar, Selection, SelectionState,
    };

    pub use crate::{core, widgets};
}

pub use radiogroup_core as core;
pub use radiogroup_widgets as widgets;
