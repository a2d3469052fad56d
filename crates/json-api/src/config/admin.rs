//! Admin Config

use clap::Args;

/// Admin route settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Value the `X-Admin-Key` header must carry on admin routes
    #[arg(
        long,
        env = "ADMIN_KEY",
        default_value = "demo-admin-key",
        hide_env_values = true
    )]
    pub admin_key: String,
}
