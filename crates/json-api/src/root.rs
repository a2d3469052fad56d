//! Root Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RootResponse {
    pub message: String,
}

/// Root Handler
#[endpoint(tags("health"), summary = "Service banner")]
pub(crate) async fn handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Flames storefront API".to_string(),
    })
}
