use thiserror::Error;

/// Errors raised while resolving a field configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("unknown field preset `{0}`")]
    UnknownPreset(String),
    #[error("unknown field setting `{0}`")]
    UnknownSetting(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` must be {expected}")]
    OutOfRange {
        key: &'static str,
        expected: &'static str,
    },
    #[error("unknown visual mode `{0}`")]
    UnknownMode(String),
}
