use super::messages;
use super::types::{LoginState, LoginView};
use crate::services::client::{AuthProvider, SessionReader};

/// What the login page renders on this pass
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// Replace the current route, nothing else is drawn
    Redirect { target: String },
    Email {
        feedback: Option<&'static str>,
    },
    Password {
        prompt: String,
        feedback: Option<&'static str>,
    },
    Providers {
        /// Either the sign-in prompt or the "no providers" notice
        message: String,
        buttons: Vec<AuthProvider>,
    },
}

/// Pick the screen for the current state.
///
/// A pending redirect wins, then an existing session sends the user to
/// `landing_route`, and only then does the login view decide.
pub fn select_screen(state: &LoginState, session: &impl SessionReader, landing_route: &str) -> Screen {
    if let LoginView::Redirecting { target } = &state.view {
        return Screen::Redirect {
            target: target.clone(),
        };
    }

    if session.access_token().is_some() {
        return Screen::Redirect {
            target: landing_route.to_string(),
        };
    }

    match &state.view {
        LoginView::PasswordEntry {
            email,
            organization,
        } => Screen::Password {
            prompt: messages::sign_in_as_at(email, &organization.name),
            feedback: state
                .draft
                .is_invalid()
                .then_some(messages::ERROR_INVALID_PASSWORD),
        },
        LoginView::ProviderSelection {
            email,
            organization,
            providers,
        } => {
            let message = if providers.is_empty() {
                messages::ERROR_NO_AUTH_PROVIDERS.to_string()
            } else {
                messages::sign_in_as_at(email, &organization.name)
            };
            Screen::Providers {
                message,
                buttons: providers.clone(),
            }
        }
        LoginView::EmailEntry | LoginView::Redirecting { .. } => Screen::Email {
            feedback: state
                .draft
                .is_invalid()
                .then_some(messages::ERROR_INVALID_EMAIL),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::types::{LoginAction, SessionDraft};
    use crate::services::client::{Credentials, Organization, PreflightResponse};
    use crate::services::errors::LoginErrorKind;

    fn no_session() -> Option<Credentials> {
        None
    }

    fn signed_in() -> Option<Credentials> {
        Some(Credentials {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            access_token_expiry: 0,
        })
    }

    fn after_preflight(require_password: bool, providers: Option<Vec<AuthProvider>>) -> LoginState {
        LoginState::default().reduce(LoginAction::PreflightSucceeded {
            email: "jane@acme.test".to_string(),
            response: PreflightResponse {
                organization: Organization {
                    id: "org-1".to_string(),
                    name: "Acme".to_string(),
                    ..Default::default()
                },
                auth_providers: providers,
                require_password,
            },
        })
    }

    fn provider(id: &str, name: &str) -> AuthProvider {
        AuthProvider {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_default_state_is_email_entry() {
        assert_eq!(
            select_screen(&LoginState::default(), &no_session(), "/search"),
            Screen::Email { feedback: None }
        );
    }

    #[test]
    fn test_password_prompt_names_email_and_organization() {
        let screen = select_screen(&after_preflight(true, None), &no_session(), "/search");

        match screen {
            Screen::Password { prompt, feedback } => {
                assert!(prompt.contains("jane@acme.test"));
                assert!(prompt.contains("Acme"));
                assert_eq!(feedback, None);
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_one_button_per_provider() {
        let providers = vec![provider("p-1", "Acme SSO"), provider("p-2", "Google")];
        let screen = select_screen(
            &after_preflight(false, Some(providers.clone())),
            &no_session(),
            "/search",
        );

        match screen {
            Screen::Providers { message, buttons } => {
                assert!(message.contains("Acme"));
                let labels: Vec<_> = buttons.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(labels, vec!["Acme SSO", "Google"]);
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_empty_provider_list_shows_notice_and_no_buttons() {
        let screen = select_screen(&after_preflight(false, Some(vec![])), &no_session(), "/search");

        assert_eq!(
            screen,
            Screen::Providers {
                message: messages::ERROR_NO_AUTH_PROVIDERS.to_string(),
                buttons: vec![],
            }
        );
    }

    #[test]
    fn test_existing_session_overrides_every_view() {
        let states = vec![
            LoginState::default(),
            after_preflight(true, None),
            after_preflight(false, Some(vec![provider("p-1", "Acme SSO")])),
            LoginState::default().reduce(LoginAction::RequestFailed),
        ];

        for state in states {
            assert_eq!(
                select_screen(&state, &signed_in(), "/search"),
                Screen::Redirect {
                    target: "/search".to_string()
                }
            );
        }
    }

    #[test]
    fn test_pending_redirect_wins_over_session() {
        let state = LoginState {
            draft: SessionDraft::default(),
            view: LoginView::Redirecting {
                target: "/bookings".to_string(),
            },
        };

        assert_eq!(
            select_screen(&state, &signed_in(), "/search"),
            Screen::Redirect {
                target: "/bookings".to_string()
            }
        );
    }

    #[test]
    fn test_feedback_matches_active_view() {
        let mut email_state = LoginState::default();
        email_state.draft.invalid = Some(LoginErrorKind::InputShapeInvalid);
        assert_eq!(
            select_screen(&email_state, &no_session(), "/search"),
            Screen::Email {
                feedback: Some(messages::ERROR_INVALID_EMAIL)
            }
        );

        let password_state = after_preflight(true, None).reduce(LoginAction::RequestFailed);
        match select_screen(&password_state, &no_session(), "/search") {
            Screen::Password { feedback, .. } => {
                assert_eq!(feedback, Some(messages::ERROR_INVALID_PASSWORD))
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }
}
