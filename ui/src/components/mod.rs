//! User Interface Components
//!
//! This module contains the Dioxus components of the login screen:
//!
//! - **forms**: email entry, password entry and provider selection
//! - **input**: validated input fields and inline feedback

pub mod forms;
pub mod input;
