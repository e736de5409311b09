use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct InvalidFeedbackProps {
    #[props(!optional)]
    pub message: Option<&'static str>,
}

/// Inline error under an input; renders nothing while the input is valid
#[component]
pub fn InvalidFeedback(props: InvalidFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                role: "alert",
                "⚠ {message}"
            }
        },
        None => rsx! {},
    }
}
