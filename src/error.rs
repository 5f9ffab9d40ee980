/// Errors that can occur while generating approximation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parameter that must be nonzero was zero. The message names the
    /// offending parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A [`std::result::Result`] specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
