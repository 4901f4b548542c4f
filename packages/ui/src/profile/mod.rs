//! The profile screen's logic, independent of rendering.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`state`] | [`ProfileState`] and its parts |
//! | [`action`] | [`ProfileAction`] and the pure [`reduce`] |
//! | [`handlers`] | [`ProfileService`]: load, submit and upload intents |
//! | [`validate`] | [`ValidationError`] and the field checks |
//! | [`feedback`] | Success/error banners and their expiry |

pub mod action;
pub mod feedback;
pub mod handlers;
pub mod state;
pub mod validate;

pub use action::{reduce, ProfileAction};
pub use feedback::{wait_for_dismissal, DismissTicket, Feedback};
pub use handlers::{Destination, LoadOutcome, ProfileService};
pub use state::{Field, FormState, ProfileState, UiState};
pub use validate::ValidationError;
