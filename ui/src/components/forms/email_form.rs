use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::input::{InputType, InvalidFeedback, ValidatedInput};
use crate::features::login::{messages, BrowserLoginFlow, LoginAction, LoginState};

#[derive(Props, PartialEq, Clone)]
pub struct EmailFormProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    #[props(!optional)]
    pub feedback: Option<&'static str>,
}

#[component]
pub fn EmailForm(props: EmailFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let flow = use_context::<Rc<BrowserLoginFlow>>();
    let version = flow.config().product_version.clone();

    rsx! {
        form {
            class: "form-signin",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let flow = flow.clone();
                let email = state.read().draft.email.clone();
                spawn(async move {
                    let action = flow.submit_email(&email).await;
                    dispatch.call(action);
                });
            },

            h3 { "{messages::FIND_YOUR_PLACE}" }

            div {
                class: "input-group",
                ValidatedInput {
                    value: state.read().draft.email.clone(),
                    placeholder: messages::EMAIL_PLACEHOLDER.to_string(),
                    input_type: InputType::Email,
                    invalid: props.feedback.is_some(),
                    on_change: move |data: String| dispatch.call(LoginAction::SetEmail(data))
                }
                button {
                    class: "submit-button",
                    r#type: "submit",
                    "{messages::SUBMIT}"
                }
            }
            InvalidFeedback { message: props.feedback }

            div {
                class: "remember-me",
                input {
                    id: "check-rememberme",
                    r#type: "checkbox",
                    checked: state.read().draft.remember_me,
                    onchange: move |evt: FormEvent| dispatch.call(LoginAction::SetRememberMe(evt.checked()))
                }
                label {
                    r#for: "check-rememberme",
                    "{messages::REMEMBER_ME}"
                }
            }

            p {
                class: "margin-top-50",
                a { href: "/resetpw", "{messages::FORGOT_PASSWORD}" }
            }
        }
        p {
            class: "copyright-footer",
            "{messages::copyright_footer(&version)}"
        }
    }
}
