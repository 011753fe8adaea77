use serde::{Deserialize, Serialize};
use std::fmt;

/// A single literal a filter can compare a column against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Argument of a filter: one scalar, or an ordered list of them for
/// membership comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Arg {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Scalar {
    pub fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }

    /// Literal form used inside filter text: strings are wrapped in double
    /// quotes, everything else is rendered bare.
    pub fn literal(&self) -> String {
        match self {
            Scalar::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) if v.is_nan() => write!(f, "NaN"),
            Scalar::Float(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "+Inf" } else { "-Inf" })
            }
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Boolean(v) => write!(f, "{v}"),
        }
    }
}

impl Arg {
    /// True only for a single string scalar; lists never count as strings.
    pub fn is_string(&self) -> bool {
        matches!(self, Arg::Scalar(s) if s.is_string())
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Arg::Scalar(_) => None,
            Arg::List(items) => Some(items),
        }
    }

    /// Literal form used inside filter text. Only a single string is
    /// quoted; lists keep their plain rendering.
    pub fn literal(&self) -> String {
        match self {
            Arg::Scalar(s) => s.literal(),
            Arg::List(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Scalar(s) => write!(f, "{s}"),
            Arg::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Boolean(v)
    }
}

impl From<Scalar> for Arg {
    fn from(v: Scalar) -> Self {
        Arg::Scalar(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Scalar(v.into())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Scalar(v.into())
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Scalar(v.into())
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Scalar(v.into())
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Scalar(v.into())
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Scalar(v.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}
