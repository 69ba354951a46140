//! Domain models with validation at construction
//!
//! Request input is checked when building these types. Invalid input
//! returns ValidationErrors, never a panic.

pub mod company;
pub mod pagination;
pub mod validation;

pub use company::{Company, CompanyPayload};
pub use pagination::ListParams;
pub use validation::{FieldError, LocSegment, ValidationErrors};
