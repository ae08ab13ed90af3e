//! Common utilities and shared types for ess-rs.
//!
//! This crate provides foundational components used across all ess-rs crates:
//!
//! - **Configuration**: Application settings via [`Settings`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Response envelope**: The mobile API envelope via [`ApiResponse`]
//! - **Formatting**: Date and currency display helpers
//!
//! # Example
//!
//! ```no_run
//! use ess_common::{AppResult, Settings};
//!
//! fn example() -> AppResult<()> {
//!     let settings = Settings::load()?;
//!     println!("Dates shown as {}", settings.display.date_format);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod response;

pub use config::{DisplayConfig, Settings};
pub use error::{AppError, AppResult};
pub use format::{fmt_money, format_date};
pub use response::ApiResponse;
