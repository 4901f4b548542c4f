use dioxus::prelude::*;

use views::{Auth, Dashboard, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/auth")]
    Auth {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting profile web app");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::ServiceProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/profile`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
