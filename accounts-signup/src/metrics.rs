use crate::form::FieldId;

/// Telemetry events emitted by the sign-up flow. The wire names are
/// part of the metrics pipeline's contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user backed out of the sign-up mid-flight. Not an error.
    LoginCanceled,
    /// A submit was blocked by local validation.
    ValidationError {
        field: FieldId,
        message: &'static str,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginCanceled => "login:canceled",
            Self::ValidationError { .. } => "validation_error",
        }
    }
}

/// Telemetry sink, owned by the surrounding app.
pub trait Metrics: std::fmt::Debug {
    fn log_event(&self, event: Event);
}

/// Sink writing events to the log, for setups without a telemetry
/// pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMetrics;

impl Metrics for LogMetrics {
    fn log_event(&self, event: Event) {
        match &event {
            Event::ValidationError { field, message } => {
                tracing::info!(
                    "metrics event '{}': field '{}': {}",
                    event.name(),
                    field.as_str(),
                    message
                );
            }
            Event::LoginCanceled => tracing::info!("metrics event '{}'", event.name()),
        }
    }
}
