//! This crate contains the profile screen shared by the web and desktop apps.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod profile;
pub use profile::Destination;

pub mod services;

mod provider;
pub use provider::{use_profile_service, ServiceProvider};

mod timer;

pub mod views;
pub use views::ProfileView;
