//! Contact Registry - token-authenticated REST API for managing contact
//! lists and their members over PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
