use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown type `{type_name}` declared for column `{column}`")]
    UnknownColumnType { column: String, type_name: String },
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
}
