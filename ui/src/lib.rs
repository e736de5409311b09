//! This crate contains the login screen and the services behind it.

pub mod app;
pub use app::{AuthContext, LoginPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
