//! Field validation and coercion for Ferrule
//!
//! Checks raw input fields (decoded request parameters, config values, ...)
//! one at a time against declarative rules, folding accepted values into an
//! output mapping and failing fast on the first rejected field.
//!
//! # Examples
//!
//! ## Required and Optional Fields
//!
//! ```
//! use ferrule_validation::{ErrorKind, FieldKey, FieldRules, FieldType, FieldValidator, Params, Value};
//!
//! let input = Params::from_json_str(r#"{"name": "Ada", "age": 36}"#).unwrap();
//!
//! let name = FieldKey::sym("name");
//! let age = FieldKey::sym("age");
//! let role = FieldKey::sym("role");
//!
//! let acc = FieldValidator::required(&name, &input, Params::new(), &FieldRules::new().of_type(FieldType::String))
//!     .and_then(|acc| FieldValidator::required(&age, &input, acc, &FieldRules::new().of_type(FieldType::Integer)))
//!     .and_then(|acc| FieldValidator::optional(&role, &input, acc, &FieldRules::new().default("guest")))
//!     .unwrap();
//!
//! assert_eq!(acc.get(&age), Some(&Value::Integer(36)));
//! assert_eq!(acc.get(&role), Some(&Value::from("guest")));
//!
//! let err = FieldValidator::required(&FieldKey::sym("email"), &input, acc, &FieldRules::new())
//!     .unwrap_err();
//! assert_eq!(err.kind, ErrorKind::MissingArg);
//! ```
//!
//! ## Casting to Known Symbols
//!
//! ```
//! use ferrule_validation::{Cast, ErrorKind, FieldKey, FieldRules, FieldType, FieldValidator, Params, Symbol};
//!
//! Symbol::register_all(["admin", "member"]);
//!
//! let rules = FieldRules::new()
//!     .of_type(FieldType::String)
//!     .cast(Cast::Symbol)
//!     .allowed([Symbol::intern("admin"), Symbol::intern("member")]);
//!
//! let role = FieldKey::sym("role");
//! let ok = Params::new().with("role", "admin");
//! assert!(FieldValidator::required(&role, &ok, Params::new(), &rules).is_ok());
//!
//! // Unknown names are rejected and never become symbols
//! let bad = Params::new().with("role", "superuser-from-the-internet");
//! let err = FieldValidator::required(&role, &bad, Params::new(), &rules).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::BadValue);
//! assert!(!Symbol::is_registered("superuser-from-the-internet"));
//! ```
//!
//! ## Post-processing
//!
//! ```
//! use ferrule_validation::{ErrorKind, FieldKey, FieldRules, FieldType, FieldValidator, Params, Value};
//!
//! let adult = FieldRules::new().of_type(FieldType::Integer).post(|v| match v.as_i64() {
//!     Some(n) if n >= 18 => Ok(v),
//!     _ => Err(ErrorKind::custom("too_young")),
//! });
//!
//! let input = Params::new().with("age", 12);
//! let err = FieldValidator::required(&FieldKey::sym("age"), &input, Params::new(), &adult).unwrap_err();
//! assert_eq!(err.kind.as_str(), "too_young");
//! ```

mod config;
mod errors;
mod field_set;
mod key;
mod params;
mod rules;
mod symbol;
mod validators;
mod value;

pub use config::*;
pub use errors::*;
pub use field_set::*;
pub use key::*;
pub use params::*;
pub use rules::*;
pub use symbol::*;
pub use validators::*;
pub use value::*;
