//! Error types and error handling.
//!
//! This module defines the errors produced during analysis:
//!
//! - Lexical errors for characters no grammar rule accepts
//! - Undefined-reference diagnostics from the semantic pass
//! - Configuration errors (empty source, unreadable settings)
//! - Helpful suggestions attached to each error kind

pub mod errors;
