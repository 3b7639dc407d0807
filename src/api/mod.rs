//! API Layer
//!
//! Thin HTTP client over the external Argus backend.

pub mod client;

pub use client::*;
