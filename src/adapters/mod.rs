//! Adapters implementing the ports against concrete infrastructure.

pub mod http;
pub mod postgres;
