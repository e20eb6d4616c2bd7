use arp_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },
    #[error("row `{0}` is not in the current row set")]
    UnknownRow(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ViewError {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
