//! State

use std::sync::Arc;

use flames_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Expected `X-Admin-Key` header value.
    pub(crate) admin_key: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_key: String) -> Self {
        Self { app, admin_key }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, admin_key: String) -> Arc<Self> {
        Arc::new(Self::new(app, admin_key))
    }
}
