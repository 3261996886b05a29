//! Domain types, validation rules, and the shared error taxonomy for the
//! comment service.

pub mod comments;
pub mod error;
pub mod types;
