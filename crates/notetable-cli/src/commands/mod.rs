//! CLI command implementations

pub mod convert;
pub mod inspect;
pub mod json_output;
pub mod validate;
