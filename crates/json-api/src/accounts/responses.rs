//! Account Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flames_app::domain::accounts::records::Session;

/// Signed-in session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    /// Bearer token for later requests
    pub token: String,

    pub user_id: Uuid,
    pub name: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse {
            token: session.token,
            user_id: session.user.into(),
            name: session.name,
        }
    }
}
