use thiserror::Error;

/// Errors returned when a render configuration cannot produce a barcode.
/// Input text never fails to encode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
