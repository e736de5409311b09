use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub invalid: bool,
    /// Zero leaves the native `minlength` attribute off
    #[props(default)]
    pub min_length: usize,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let class = if props.invalid {
        "input-field is-invalid"
    } else {
        "input-field"
    };

    rsx! {
        input {
            class: "{class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: true,
            autofocus: true,
            minlength: (props.min_length > 0).then(|| props.min_length.to_string()),
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
