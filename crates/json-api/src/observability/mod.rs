//! Logging, tracing export and Prometheus metrics for the storefront API.
//!
//! [`Observability::init`] installs the subscriber once at startup. Every request then passes
//! through [`request_logging`], which assigns a request id, opens a span and records the HTTP
//! metrics served by [`metrics_handler`].

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::{CheckoutOutcome, metrics_handler, record_checkout};
pub(crate) use request::request_logging;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to build OTLP span exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("tracing subscriber already installed or invalid: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
