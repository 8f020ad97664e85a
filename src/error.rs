use thiserror::Error;

/// Boundary errors raised while converting the server page props into domain
/// types. The core itself never produces these: once the props are parsed,
/// every operation is total and slot rejections travel as plain values, not
/// errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Malformed booking props: {0}")]
    Props(#[from] serde_json::Error),
    #[error("Invalid reserved-slot timestamp: {0}")]
    InvalidTimestamp(String),
}
