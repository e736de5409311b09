use std::rc::Rc;

use dioxus::prelude::*;

use crate::features::login::{messages, BrowserLoginFlow, LoginAction};
use crate::services::client::AuthProvider;
use crate::services::navigation::BrowserNavigator;

#[derive(Props, PartialEq, Clone)]
pub struct ProviderSelectionFormProps {
    pub dispatch: EventHandler<LoginAction>,
    pub message: String,
    pub providers: Vec<AuthProvider>,
    pub remember_me: bool,
}

#[component]
pub fn ProviderSelectionForm(props: ProviderSelectionFormProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "form-signin",
            p { "{props.message}" }

            for provider in props.providers.iter().cloned() {
                ProviderButton {
                    key: "{provider.id}",
                    provider: provider,
                    remember_me: props.remember_me
                }
            }

            p {
                class: "margin-top-50",
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(LoginAction::BackToEmailEntry),
                    "{messages::BACK}"
                }
            }
        }
    }
}

#[component]
fn ProviderButton(provider: AuthProvider, remember_me: bool) -> Element {
    let flow = use_context::<Rc<BrowserLoginFlow>>();
    let label = provider.name.clone();

    rsx! {
        p {
            button {
                class: "btn-auth-provider",
                r#type: "button",
                onclick: move |_| flow.select_provider(&provider, remember_me, &BrowserNavigator),
                "{label}"
            }
        }
    }
}
