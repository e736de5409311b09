//! User-facing strings of the login screen

pub const FIND_YOUR_PLACE: &str = "Find your place";
pub const EMAIL_PLACEHOLDER: &str = "you@company.com";
pub const PASSWORD_PLACEHOLDER: &str = "Password";
pub const REMEMBER_ME: &str = "Stay signed in";
pub const FORGOT_PASSWORD: &str = "Forgot password?";
pub const BACK: &str = "Back";
pub const SUBMIT: &str = "➤";

pub const ERROR_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const ERROR_INVALID_PASSWORD: &str = "Invalid password.";
pub const ERROR_NO_AUTH_PROVIDERS: &str =
    "No authentication providers are available for your organization.";

pub fn sign_in_as_at(email: &str, organization: &str) -> String {
    format!("Sign in as {} at {}", email, organization)
}

pub fn copyright_footer(version: &str) -> String {
    format!("© Booking · Version {}", version)
}
