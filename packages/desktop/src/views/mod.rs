mod placeholders;
pub use placeholders::{Auth, Dashboard};

mod profile;
pub use profile::Profile;
