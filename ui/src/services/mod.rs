//! Infrastructure Services
//!
//! This module provides the infrastructure the login screen talks to:
//!
//! - **client**: booking backend calls and credential storage
//! - **config**: backend URL, token lifetime and route settings
//! - **errors**: the user-facing error taxonomy
//! - **navigation**: leaving the app for an identity provider
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod errors;
pub mod navigation;
