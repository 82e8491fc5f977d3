//! API Module
//!
//! HTTP handlers and routing for the catalog server REST API.
//!
//! # Endpoints
//! - `GET /items` - List items with search and pagination
//! - `GET /items/:id` - Retrieve a single item
//! - `POST /items` - Create an item
//! - `GET /stats` - Summary statistics over the collection
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
