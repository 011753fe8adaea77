use crate::filter::comparator::Comparator;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown comparator: {0}")]
    UnknownComparator(String),

    #[error("unknown column type: {0}")]
    UnknownColumnType(String),

    #[error("comparator `{comparator}` on column `{column}` requires a list argument")]
    ExpectedList {
        comparator: Comparator,
        column: String,
    },

    #[error("comparator `{comparator}` on column `{column}` requires a scalar argument")]
    ExpectedScalar {
        comparator: Comparator,
        column: String,
    },
}
