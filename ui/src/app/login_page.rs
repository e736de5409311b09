use std::rc::Rc;

use dioxus::prelude::*;

use super::AuthContext;
use crate::components::forms::{EmailForm, PasswordForm, ProviderSelectionForm};
use crate::console_info;
use crate::features::login::{select_screen, BrowserLoginFlow, LoginAction, LoginState, Screen};
use crate::services::config::get_global_config;
use crate::services::navigation::replace_route;

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");
const LOGO: Asset = asset!("/assets/img/logo.svg");

#[component]
pub fn LoginPage() -> Element {
    let flow = use_context_provider(|| Rc::new(BrowserLoginFlow::browser(get_global_config())));
    let landing_route = flow.config().post_login_route.clone();
    let mut auth = use_context::<AuthContext>();
    let navigator = use_navigator();

    // Local to this mount; a remount starts from an empty draft
    let mut state = use_signal(LoginState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        if let LoginAction::LoginCompleted(outcome) = &action {
            auth.sign_in(outcome);
        }
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let screen = use_memo(move || select_screen(&state.read(), &auth, &landing_route));

    use_effect(move || {
        if let Screen::Redirect { target } = screen() {
            console_info!("[Login Page] Redirecting to {}", target);
            replace_route(navigator, &target);
        }
    });

    let body = match screen() {
        Screen::Redirect { .. } => rsx! {},
        Screen::Email { feedback } => rsx! {
            EmailForm {
                state: state,
                dispatch: dispatch,
                feedback: feedback
            }
        },
        Screen::Password { prompt, feedback } => rsx! {
            PasswordForm {
                state: state,
                dispatch: dispatch,
                prompt: prompt,
                feedback: feedback
            }
        },
        Screen::Providers { message, buttons } => rsx! {
            ProviderSelectionForm {
                dispatch: dispatch,
                message: message,
                providers: buttons,
                remember_me: state.read().draft.remember_me
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div {
            class: "container-signin",
            img {
                class: "logo",
                src: LOGO,
                alt: "Booking"
            }
            {body}
        }
    }
}
