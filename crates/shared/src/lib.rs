//! Shared utilities for the Config Tracker backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Common validation logic for request fields

pub mod validation;
