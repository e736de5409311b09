mod auth_context;
mod login_page;

pub use auth_context::AuthContext;
pub use login_page::LoginPage;
