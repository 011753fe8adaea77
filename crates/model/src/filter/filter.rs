use crate::{core::value::Arg, error::ModelError, filter::comparator::Comparator};
use std::fmt;

/// A single predicate over one column.
///
/// The column is not checked against any schema and the argument is not
/// checked against the comparator when the filter is built; see
/// [`Filter::check_arg`] for the check an evaluator runs before use.
///
/// `inverse` negates the whole predicate on top of whatever the comparator
/// expresses. It is kept as a flag instead of being folded into the
/// comparator, so the text form can always express `not <predicate>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    comparator: Comparator,
    column: String,
    arg: Arg,
    inverse: bool,
}

impl Filter {
    pub fn new(comparator: Comparator, column: impl Into<String>, arg: impl Into<Arg>) -> Self {
        Self::with_inverse(comparator, column, arg, false)
    }

    pub fn with_inverse(
        comparator: Comparator,
        column: impl Into<String>,
        arg: impl Into<Arg>,
        inverse: bool,
    ) -> Self {
        Filter {
            comparator,
            column: column.into(),
            arg: arg.into(),
            inverse,
        }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn arg(&self) -> &Arg {
        &self.arg
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// The same predicate with the inverse flag toggled.
    pub fn negate(self) -> Filter {
        Filter {
            inverse: !self.inverse,
            ..self
        }
    }

    /// Rewrites an inverted filter into the equivalent plain one using the
    /// comparator's inverse. Non-inverted filters are returned unchanged.
    pub fn fold_inverse(&self) -> Filter {
        if !self.inverse {
            return self.clone();
        }

        Filter {
            comparator: self.comparator.inverse(),
            column: self.column.clone(),
            arg: self.arg.clone(),
            inverse: false,
        }
    }

    /// Checks that the argument has the shape the comparator needs: a list
    /// for membership comparators, a scalar for everything else.
    pub fn check_arg(&self) -> Result<(), ModelError> {
        match (self.comparator.is_membership(), self.arg.as_list().is_some()) {
            (true, false) => Err(ModelError::ExpectedList {
                comparator: self.comparator,
                column: self.column.clone(),
            }),
            (false, true) => Err(ModelError::ExpectedScalar {
                comparator: self.comparator,
                column: self.column.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = format!(
            "[\"{}\", \"{}\", {}]",
            self.comparator,
            self.column,
            self.arg.literal()
        );

        if self.inverse {
            write!(f, "[\"not\", {inner}]")
        } else {
            write!(f, "{inner}")
        }
    }
}
