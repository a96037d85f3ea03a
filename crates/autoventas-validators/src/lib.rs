//! Value validators for AutoVentas forms
//!
//! This crate provides the pure validation predicates shared by every form
//! of the site: email format, person-name format, account-name format,
//! length ranges, and password strength scoring. Validators know nothing
//! about forms or rendering; they check a value and return a typed error.

pub mod email;
pub mod errors;
pub mod password;
pub mod string;

pub use email::EmailValidator;
pub use errors::{ValidationError, ValidationResult};
pub use password::{
    PasswordStrengthValidator, StrengthChecklist, StrengthReport, StrengthTier, strength,
};
pub use string::{LengthRangeValidator, NameValidator, RequiredValidator, UsernameValidator};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::email::*;
    pub use crate::errors::*;
    pub use crate::password::*;
    pub use crate::string::*;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationResult<()>;
}
