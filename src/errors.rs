use thiserror::Error;

/// Errors produced at the parsing rim of the library.
///
/// The computational core has no error path: degenerate astronomical
/// conditions such as circumpolarity are valid output states, reported
/// through flags on the result structures rather than through `Err`.
#[derive(Error, Debug)]
pub enum ZenithError {
    #[error("Invalid sexagesimal string: {0}")]
    InvalidSexagesimal(String),

    #[error("Invalid right ascension string: {0}")]
    InvalidRightAscension(String),

    #[error("Invalid declination string: {0}")]
    InvalidDeclination(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(#[from] hifitime::HifitimeError),
}
