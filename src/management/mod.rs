//! In-memory state the client manages between requests.

mod auth;

pub use auth::TokenManager;
