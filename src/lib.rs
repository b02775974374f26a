//! Network Registry API
//!
//! A Rust-based microservice resolving blockchain chain identifiers to their
//! connection parameters, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
