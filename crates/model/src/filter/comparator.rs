use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Relation a filter applies between a column and its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    Nin,
}

impl Comparator {
    pub const ALL: [Comparator; 8] = [
        Comparator::Gt,
        Comparator::Gte,
        Comparator::Eq,
        Comparator::Neq,
        Comparator::Lt,
        Comparator::Lte,
        Comparator::In,
        Comparator::Nin,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Eq => "==",
            Comparator::Neq => "!=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::In => "in",
            Comparator::Nin => "not in",
        }
    }

    /// The comparator expressing the logical negation of this one, so that
    /// `not (col > 5)` can be rewritten as `col <= 5`.
    ///
    /// Every comparator has exactly one partner and inverting twice returns
    /// the original.
    pub const fn inverse(&self) -> Comparator {
        match self {
            Comparator::Gt => Comparator::Lte,
            Comparator::Gte => Comparator::Lt,
            Comparator::Eq => Comparator::Neq,
            Comparator::Neq => Comparator::Eq,
            Comparator::Lt => Comparator::Gte,
            Comparator::Lte => Comparator::Gt,
            Comparator::In => Comparator::Nin,
            Comparator::Nin => Comparator::In,
        }
    }

    /// Membership comparators take a list argument.
    pub const fn is_membership(&self) -> bool {
        matches!(self, Comparator::In | Comparator::Nin)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Comparator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::UnknownComparator(s.to_string()))
    }
}
