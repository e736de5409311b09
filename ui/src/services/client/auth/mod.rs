mod account;
mod login;

pub use account::fetch_user_context_impl;
pub use login::{password_login_impl, preflight_impl};
