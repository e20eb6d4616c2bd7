use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("row is missing its id field `{field}`")]
    MissingId { field: String },
    #[error("duplicate row id `{0}` in row set")]
    DuplicateId(String),
    #[error("unknown action key `{0}`")]
    UnknownAction(String),
    #[error("unknown button color `{0}`")]
    UnknownColor(String),
    #[error("invalid action entry `{key}`: {message}")]
    InvalidActionEntry { key: String, message: String },
    #[error("action `{0}` is configured more than once")]
    DuplicateAction(String),
    #[error("action `{0}` has no configured style")]
    MissingAction(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
