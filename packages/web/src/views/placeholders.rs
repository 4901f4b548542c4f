//! Screens owned by other parts of the product. They only exist so the
//! profile screen has somewhere to navigate to.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Auth() -> Element {
    rsx! {
        div {
            class: "profile-container",
            h1 { "Sign in" }
            p { "Sign in to manage your profile." }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "profile-container",
            h1 { "Dashboard" }
            Link { to: Route::Profile {}, "My Profile" }
        }
    }
}
