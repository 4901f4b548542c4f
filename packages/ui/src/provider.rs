//! Context providing the profile service to the component tree.

use dioxus::prelude::*;

use crate::services::{load_config, make_service, AppService};

/// Get the profile service installed by [`ServiceProvider`].
pub fn use_profile_service() -> AppService {
    use_context::<AppService>()
}

/// Provider component that builds the platform's profile service once.
/// Wrap your app with this component before rendering a `ProfileView`.
#[component]
pub fn ServiceProvider(children: Element) -> Element {
    use_context_provider(|| make_service(load_config()));

    rsx! {
        {children}
    }
}
