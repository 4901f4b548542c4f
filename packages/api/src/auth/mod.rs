//! Client-side session: the bearer token and the cached user it belongs to.

mod session;
mod token;

pub use session::{current_timestamp, Session, TOKEN_KEY};
pub use token::TokenClaims;
