//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod contact_repository;
mod list_repository;

pub use contact_repository::ContactRepository;
pub use list_repository::ListRepository;
