//! Meteen Core - Shared types library.
//!
//! This crate provides common types used across all Meteen components:
//! - `site` - JSON API backing the restaurant website
//! - `cli` - Command-line tools for browsing and seeding the backend
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and menu categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
