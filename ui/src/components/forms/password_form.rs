use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::input::{InputType, InvalidFeedback, ValidatedInput};
use crate::features::login::{
    messages, password_meets_minimum, BrowserLoginFlow, LoginAction, LoginState,
};

#[derive(Props, PartialEq, Clone)]
pub struct PasswordFormProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    pub prompt: String,
    #[props(!optional)]
    pub feedback: Option<&'static str>,
}

#[component]
pub fn PasswordForm(props: PasswordFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let flow = use_context::<Rc<BrowserLoginFlow>>();
    let min_length = flow.config().min_password_length;
    let cancel = flow.cancel_password_entry();
    let long_enough = password_meets_minimum(&state.read().draft.password, min_length);

    rsx! {
        form {
            class: "form-signin",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let flow = flow.clone();
                let login_state = state.read().clone();
                if !password_meets_minimum(&login_state.draft.password, flow.config().min_password_length) {
                    return;
                }
                spawn(async move {
                    let action = flow.submit_password(&login_state).await;
                    dispatch.call(action);
                });
            },

            p { "{props.prompt}" }

            div {
                class: "input-group",
                ValidatedInput {
                    value: state.read().draft.password.clone(),
                    placeholder: messages::PASSWORD_PLACEHOLDER.to_string(),
                    input_type: InputType::Password,
                    invalid: props.feedback.is_some(),
                    min_length: min_length,
                    on_change: move |data: String| dispatch.call(LoginAction::SetPassword(data))
                }
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: !long_enough,
                    "{messages::SUBMIT}"
                }
            }
            InvalidFeedback { message: props.feedback }

            p {
                class: "margin-top-50",
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(cancel.clone()),
                    "{messages::BACK}"
                }
            }
        }
    }
}
