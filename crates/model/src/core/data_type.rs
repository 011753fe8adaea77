use crate::error::ModelError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

/// Column type that can be declared up front for a CSV column instead of
/// being detected from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    String,
    Enum,
}

lazy_static! {
    static ref TYPE_NAME_MAP: HashMap<&'static str, ColumnType> = build_type_name_map();
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
            ColumnType::Enum => "enum",
        }
    }

    pub fn from_name(type_name: &str) -> Result<Self, ModelError> {
        let normalized = type_name.trim().to_ascii_lowercase();
        TYPE_NAME_MAP
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownColumnType(type_name.to_string()))
    }
}

impl FromStr for ColumnType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::from_name(s)
    }
}

impl TryFrom<String> for ColumnType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColumnType::from_name(&value)
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn build_type_name_map() -> HashMap<&'static str, ColumnType> {
    use ColumnType::*;
    HashMap::from([
        ("int", Int),
        ("integer", Int),
        ("float", Float),
        ("double", Float),
        ("bool", Bool),
        ("boolean", Bool),
        ("string", String),
        ("text", String),
        ("enum", Enum),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_canonical() {
        assert_eq!(ColumnType::from_name("int").unwrap(), ColumnType::Int);
        assert_eq!(ColumnType::from_name("float").unwrap(), ColumnType::Float);
        assert_eq!(ColumnType::from_name("bool").unwrap(), ColumnType::Bool);
        assert_eq!(ColumnType::from_name("string").unwrap(), ColumnType::String);
        assert_eq!(ColumnType::from_name("enum").unwrap(), ColumnType::Enum);
    }

    #[test]
    fn test_from_name_aliases_and_case() {
        assert_eq!(" Integer ".parse::<ColumnType>().unwrap(), ColumnType::Int);
        assert_eq!("DOUBLE".parse::<ColumnType>().unwrap(), ColumnType::Float);
        assert_eq!("text".parse::<ColumnType>().unwrap(), ColumnType::String);
    }

    #[test]
    fn test_unknown_type() {
        let err = ColumnType::from_name("decimal").unwrap_err();
        assert!(matches!(err, ModelError::UnknownColumnType(ref name) if name == "decimal"));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        assert_eq!(serde_json::to_string(&ColumnType::Enum).unwrap(), "\"enum\"");
        let ty: ColumnType = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(ty, ColumnType::Bool);
        assert!(serde_json::from_str::<ColumnType>("\"blob\"").is_err());
    }
}
