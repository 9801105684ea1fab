//! HTTP front end: chat page and JSON chat endpoint

pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;
pub mod types;

pub use server::build_router;
pub use server::serve_api;
