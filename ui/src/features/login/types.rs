// Core types for the login screen - no dioxus imports needed here
use crate::console_debug;
use crate::services::client::{AuthProvider, Credentials, Organization, PreflightResponse, UserContext};
use crate::services::errors::LoginErrorKind;

/// What the user has typed so far. Lives as long as the login screen is mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionDraft {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    /// Set when the last submit failed; cleared as soon as the user types again
    pub invalid: Option<LoginErrorKind>,
}

impl SessionDraft {
    pub fn is_invalid(&self) -> bool {
        self.invalid.is_some()
    }
}

/// Which part of the login screen is active
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoginView {
    #[default]
    EmailEntry,
    PasswordEntry {
        email: String,
        organization: Organization,
    },
    ProviderSelection {
        email: String,
        organization: Organization,
        providers: Vec<AuthProvider>,
    },
    Redirecting {
        target: String,
    },
}

/// Everything a completed password login produced
#[derive(Clone, Debug, PartialEq)]
pub struct LoginOutcome {
    pub credentials: Credentials,
    pub user: UserContext,
    pub target: String,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum LoginAction {
    // Draft input
    SetEmail(String),
    SetPassword(String),
    SetRememberMe(bool),

    // Email entry outcomes
    InputRejected,
    PreflightSucceeded {
        email: String,
        response: PreflightResponse,
    },

    // Any backend or storage failure, in whatever view is active
    RequestFailed,

    // Back link from password entry or provider selection
    BackToEmailEntry,

    // Password login outcome
    LoginCompleted(LoginOutcome),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub draft: SessionDraft,
    pub view: LoginView,
}

impl LoginState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: LoginAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// In-place variant used from signals so subscribers keep their handle
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        if let LoginView::Redirecting { target } = &self.view {
            console_debug!("[Login] Ignoring {:?} while redirecting to {}", action, target);
            return;
        }

        match action {
            LoginAction::SetEmail(email) => {
                // Once preflighted the email belongs to the view
                if self.view != LoginView::EmailEntry {
                    console_debug!("[Login] Ignoring email edit outside email entry");
                    return;
                }
                self.draft.email = email;
                self.draft.invalid = None;
            }
            LoginAction::SetPassword(password) => {
                self.draft.password = password;
                self.draft.invalid = None;
            }
            LoginAction::SetRememberMe(remember_me) => {
                self.draft.remember_me = remember_me;
            }
            LoginAction::InputRejected => {
                self.draft.invalid = Some(LoginErrorKind::InputShapeInvalid);
            }
            LoginAction::PreflightSucceeded { email, response } => {
                self.draft.email = email.clone();
                self.draft.invalid = None;
                self.view = if response.require_password {
                    LoginView::PasswordEntry {
                        email,
                        organization: response.organization,
                    }
                } else {
                    LoginView::ProviderSelection {
                        email,
                        organization: response.organization,
                        providers: response.auth_providers.unwrap_or_default(),
                    }
                };
            }
            LoginAction::RequestFailed => {
                self.draft.invalid = Some(LoginErrorKind::RequestFailed);
            }
            LoginAction::BackToEmailEntry => {
                self.view = LoginView::EmailEntry;
                self.draft.password.clear();
                self.draft.invalid = None;
            }
            LoginAction::LoginCompleted(outcome) => {
                self.draft.password.clear();
                self.draft.invalid = None;
                self.view = LoginView::Redirecting {
                    target: outcome.target,
                };
            }
        }
    }
}
