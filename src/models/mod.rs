//! Models Module
//!
//! Request and response DTOs for the catalog server API.

pub mod requests;
pub mod responses;

pub use requests::{ListQuery, NewItem};
pub use responses::{ErrorBody, HealthResponse, ItemPage, STACK_SENTINEL};
