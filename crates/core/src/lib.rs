//! Storefinder Core - Shared types library.
//!
//! This crate provides common types used across all Storefinder components:
//! - `catalog` - In-memory store/product directory and its services
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no global state, no entity
//! collections. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, star
//!   ratings, and user roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
