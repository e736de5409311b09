use booking_ui::services::client::SessionReader;
use booking_ui::services::navigation::replace_route;
use booking_ui::{AuthContext, LoginPage};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthContext::restore);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Booking" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/search")]
    Search {},
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}

/// Post-login landing page. Booking search itself lives elsewhere.
#[component]
fn Search() -> Element {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();

    use_effect(move || {
        if auth.access_token().is_none() {
            replace_route(navigator, &Route::Login {}.to_string());
        }
    });

    let greeting = match auth.user() {
        Some(user) if !user.email.is_empty() => format!("Signed in as {}", user.email),
        _ => "Signed in".to_string(),
    };

    rsx! {
        div {
            class: "landing",
            h2 { "{greeting}" }
        }
    }
}
