use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown publication kind `{0}`")]
    UnknownKind(String),
}
