//! Contact Book Core - Shared types library.
//!
//! This crate provides the domain types used across all Contact Book components:
//! - `server` - HTTP API and front-end mount
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP. Every contact that reaches a store has passed through
//! [`ContactInput::validate`], so storage code never sees an invalid record.
//!
//! # Modules
//!
//! - [`types`] - Contact record, its identifier, email address and input validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
