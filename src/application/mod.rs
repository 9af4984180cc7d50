//! Application layer: services orchestrating domain rules over the ports.

pub mod services;
