//! Core types for Contact Book.
//!
//! This module provides type-safe wrappers for the contact domain.

pub mod contact;
pub mod email;
pub mod id;

pub use contact::{Contact, ContactField, ContactInput, NewContact, ValidationError};
pub use email::{Email, EmailError};
pub use id::ContactId;
