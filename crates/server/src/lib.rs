//! Contact Book server library.
//!
//! This crate provides the HTTP API as a library, allowing it to be tested
//! and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
