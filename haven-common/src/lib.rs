//! haven-common - Shared types and utilities for the Haven wellness backend
//!
//! Provides the pieces every Haven service needs: the common error type,
//! PII redaction, core mood/check-in domain types, and SQLite helpers.

pub mod db;
pub mod error;
pub mod redact;
pub mod types;

pub use error::{Error, Result};
