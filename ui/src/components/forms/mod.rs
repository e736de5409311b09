pub mod email_form;
pub mod password_form;
pub mod provider_selection_form;

pub use email_form::*;
pub use password_form::*;
pub use provider_selection_form::*;
