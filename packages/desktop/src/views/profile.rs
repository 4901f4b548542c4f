use dioxus::prelude::*;

use ui::{Destination, ProfileView};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    let on_navigate = move |to: Destination| {
        let route = match to {
            Destination::Auth => Route::Auth {},
            Destination::Dashboard => Route::Dashboard {},
        };
        if to == Destination::Auth {
            nav.replace(route);
        } else {
            nav.push(route);
        }
    };

    rsx! {
        ProfileView { on_navigate }
    }
}
