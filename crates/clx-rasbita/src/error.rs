use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasbitaError {
    #[error("unknown risk identifier: {0}")]
    UnknownRisk(String),

    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}
