//! Login screen logic
//!
//! - **types**: draft input, the explicit view state machine and its reducer
//! - **flow**: preflight, password login and provider redirect sequences
//! - **view**: which screen to render for a state and session
//! - **validation**: local input checks
//! - **messages**: user-facing strings

pub mod flow;
pub mod messages;
pub mod types;
pub mod validation;
pub mod view;

pub use flow::{BrowserLoginFlow, LoginFlow};
pub use types::*;
pub use validation::*;
pub use view::{select_screen, Screen};
