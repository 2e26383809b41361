// Ferrule - declarative field validation and coercion
//
// This library checks raw input fields one at a time against per-field
// rules and folds the accepted values into an output mapping.

// Re-export optional crates
#[cfg(feature = "validation")]
pub use ferrule_validation;

#[cfg(feature = "validation")]
pub use ferrule_validation::{
    Cast, ErrorKind, FieldError, FieldKey, FieldRules, FieldSet, FieldSetConfig, FieldType,
    FieldValidator, Params, Symbol, Value,
};

// Prelude for common imports
#[cfg(feature = "validation")]
pub mod prelude {
    pub use crate::{
        Cast, ErrorKind, FieldError, FieldKey, FieldRules, FieldSet, FieldSetConfig, FieldType,
        FieldValidator, Params, Symbol, Value,
    };
}
