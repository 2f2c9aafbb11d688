use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("unknown section id `{0}`")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
