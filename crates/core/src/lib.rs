//! Core business logic for ess-rs.
//!
//! Three independent, pure decision procedures back the Employee Self
//! Service mobile API: approval action resolution, poll tallying, and
//! location trail building. All I/O stays with the caller; every
//! routine takes its inputs as plain data and returns plain data.

pub mod services;

pub use services::*;
