//! List HTTP endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::list_routes;
