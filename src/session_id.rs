use std::fmt::Debug;

use tower_sessions::session::Id;

/// Source of fresh session identifiers for
/// [`SessionHandler::create_session`](crate::SessionHandler::create_session).
///
/// Implementations only need to be random enough that collisions are rare;
/// the handler re-checks every candidate against the table before inserting.
pub trait SessionIdGenerator: Debug + Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: a 128-bit random [`tower_sessions`] id rendered as
/// URL-safe base64, so it can be placed in a cookie as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSessionId;

impl SessionIdGenerator for RandomSessionId {
    fn generate(&self) -> String {
        Id::default().to_string()
    }
}
