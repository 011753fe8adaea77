use crate::filter::filter::Filter;
use std::fmt;

/// Boolean expression over one or more filters.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    Leaf(Filter),
    And(Vec<FilterExpr>),
    Or(Vec<FilterExpr>),
    Not(Box<FilterExpr>),
}

impl FilterExpr {
    /// Create a new leaf expression.
    pub fn leaf(filter: Filter) -> Self {
        FilterExpr::Leaf(filter)
    }

    /// Create a new AND expression.
    pub fn and(exprs: Vec<FilterExpr>) -> Self {
        FilterExpr::And(exprs)
    }

    /// Create a new OR expression.
    pub fn or(exprs: Vec<FilterExpr>) -> Self {
        FilterExpr::Or(exprs)
    }

    /// Create a new NOT expression.
    pub fn not(expr: FilterExpr) -> Self {
        FilterExpr::Not(Box::new(expr))
    }

    /// Moves every negation down to the leaves.
    ///
    /// NOT over AND/OR is rewritten with De Morgan's laws, double negations
    /// cancel, and a negated leaf has its comparator replaced by the
    /// comparator's inverse. The result contains no `Not` nodes and no
    /// inverted leaves.
    pub fn push_down_not(self) -> FilterExpr {
        self.push_down(false)
    }

    fn push_down(self, negated: bool) -> FilterExpr {
        match self {
            FilterExpr::Leaf(filter) => {
                let filter = if negated { filter.negate() } else { filter };
                FilterExpr::Leaf(filter.fold_inverse())
            }
            FilterExpr::Not(inner) => inner.push_down(!negated),
            FilterExpr::And(children) => {
                let children = children.into_iter().map(|c| c.push_down(negated)).collect();
                if negated {
                    FilterExpr::Or(children)
                } else {
                    FilterExpr::And(children)
                }
            }
            FilterExpr::Or(children) => {
                let children = children.into_iter().map(|c| c.push_down(negated)).collect();
                if negated {
                    FilterExpr::And(children)
                } else {
                    FilterExpr::Or(children)
                }
            }
        }
    }

    /// All leaf filters, left to right.
    pub fn leaves(&self) -> Vec<&Filter> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Filter>) {
        match self {
            FilterExpr::Leaf(filter) => out.push(filter),
            FilterExpr::And(children) | FilterExpr::Or(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            FilterExpr::Not(inner) => inner.collect_leaves(out),
        }
    }
}

impl From<Filter> for FilterExpr {
    fn from(filter: Filter) -> Self {
        FilterExpr::Leaf(filter)
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, children) = match self {
            FilterExpr::Leaf(filter) => return write!(f, "{filter}"),
            FilterExpr::Not(inner) => return write!(f, "[\"not\", {inner}]"),
            FilterExpr::And(children) => ("and", children),
            FilterExpr::Or(children) => ("or", children),
        };

        write!(f, "[\"{op}\"")?;
        for child in children {
            write!(f, ", {child}")?;
        }
        write!(f, "]")
    }
}
