#![forbid(unsafe_code)]

//! Radio group controller and its supporting pieces.

pub mod config;
pub mod error;
pub mod form;
pub mod option;
pub mod radio;
pub mod resolver;
pub mod surface;
pub mod validation;
pub mod value;

pub use config::RadioConfig;
pub use error::{RadioError, Result};
pub use form::{FieldSnapshot, FormControl, FormData, FormParent};
pub use option::{ChoiceEntry, OptionAdapter, OptionItem, OptionSource};
pub use radio::{RadioGroup, SelectionState};
pub use resolver::ValueResolver;
pub use surface::{ChoiceSurface, HeadlessSurface, RenderedChoice};
pub use validation::{
    ChoiceContext, RequiredChoice, ValidationError, ValidationResult, Validator,
};
pub use value::{Selection, Value};
