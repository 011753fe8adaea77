use crate::file::csv::error::ConfigError;
use model::core::data_type::ColumnType;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const DEFAULT_DELIMITER: u8 = b',';

/// Settings handed to the CSV loader.
///
/// Columns without a declared type have their type detected from content.
/// Enum columns without declared values get their values from the data, in
/// no particular order, so sorting on such a column is only meaningful when
/// the values are listed here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Column separator, a single ASCII byte
    #[serde(deserialize_with = "deserialize_delimiter")]
    delimiter: u8,
    /// Whether empty strings are read as null
    empty_null: bool,
    /// Whether empty lines are skipped instead of producing a row
    ignore_empty_lines: bool,
    /// Declared type per column name
    types: HashMap<String, ColumnType>,
    /// Permitted values per enum column, in sort order
    enum_values: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct CsvConfigBuilder {
    delimiter: Option<u8>,
    empty_null: Option<bool>,
    ignore_empty_lines: Option<bool>,
    types: HashMap<String, String>,
    enum_values: HashMap<String, Vec<String>>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            empty_null: false,
            ignore_empty_lines: false,
            types: HashMap::new(),
            enum_values: HashMap::new(),
        }
    }
}

impl CsvConfig {
    pub fn builder() -> CsvConfigBuilder {
        CsvConfigBuilder::default()
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn empty_null(&self) -> bool {
        self.empty_null
    }

    pub fn ignore_empty_lines(&self) -> bool {
        self.ignore_empty_lines
    }

    pub fn types(&self) -> &HashMap<String, ColumnType> {
        &self.types
    }

    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.types.get(column).copied()
    }

    /// Declared values for an enum column. `None` means the values are
    /// taken from the data.
    pub fn enum_values(&self, column: &str) -> Option<&[String]> {
        self.enum_values.get(column).map(Vec::as_slice)
    }

    /// Columns that have enum values declared but are not typed `enum`.
    /// Their values have no effect.
    pub fn ignored_enum_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self
            .enum_values
            .keys()
            .filter(|col| self.column_type(col) != Some(ColumnType::Enum))
            .map(String::as_str)
            .collect();
        columns.sort_unstable();
        columns
    }

    /// A `csv` reader builder carrying the delimiter. Empty lines are always
    /// skipped by the `csv` crate, so `ignore_empty_lines` and `empty_null`
    /// are left to the loader.
    pub fn reader_builder(&self) -> ::csv::ReaderBuilder {
        let mut builder = ::csv::ReaderBuilder::new();
        builder.delimiter(self.delimiter);
        builder
    }

    fn warn_ignored_enum_values(&self) {
        for column in self.ignored_enum_columns() {
            warn!(
                "Enum values declared for column '{}' which is not typed as enum; ignoring",
                column
            );
        }
    }
}

impl CsvConfigBuilder {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn empty_null(mut self, empty_null: bool) -> Self {
        self.empty_null = Some(empty_null);
        self
    }

    pub fn ignore_empty_lines(mut self, ignore_empty_lines: bool) -> Self {
        self.ignore_empty_lines = Some(ignore_empty_lines);
        self
    }

    /// Declares column types by name, e.g. `"age" -> "int"`. Replaces any
    /// previously declared types.
    pub fn types<K, V>(mut self, types: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.types = types
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Lists the permitted values of enum columns, in sort order. Replaces
    /// any previously declared values.
    pub fn enum_values<K, V>(mut self, values: impl IntoIterator<Item = (K, Vec<V>)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.enum_values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
            .collect();
        self
    }

    pub fn build(self) -> Result<CsvConfig, ConfigError> {
        let delimiter = self.delimiter.unwrap_or(DEFAULT_DELIMITER);
        if !delimiter.is_ascii() {
            return Err(ConfigError::InvalidDelimiter(format!("{delimiter:#04x}")));
        }

        let mut types = HashMap::with_capacity(self.types.len());
        for (column, type_name) in self.types {
            let ty = ColumnType::from_name(&type_name).map_err(|_| {
                ConfigError::UnknownColumnType {
                    column: column.clone(),
                    type_name,
                }
            })?;
            types.insert(column, ty);
        }

        let config = CsvConfig {
            delimiter,
            empty_null: self.empty_null.unwrap_or(false),
            ignore_empty_lines: self.ignore_empty_lines.unwrap_or(false),
            types,
            enum_values: self.enum_values,
        };

        config.warn_ignored_enum_values();
        debug!(
            "Built CSV config: delimiter={:?}, {} typed columns, {} enum columns",
            config.delimiter as char,
            config.types.len(),
            config.enum_values.len()
        );

        Ok(config)
    }
}

fn deserialize_delimiter<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(serde::de::Error::custom(ConfigError::InvalidDelimiter(raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CsvConfig::default();
        assert_eq!(config.delimiter(), b',');
        assert!(!config.empty_null());
        assert!(!config.ignore_empty_lines());
        assert!(config.types().is_empty());
        assert_eq!(config.enum_values("color"), None);

        assert_eq!(CsvConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = CsvConfig::builder()
            .delimiter(b';')
            .empty_null(true)
            .ignore_empty_lines(true)
            .types([("age", "int"), ("color", "enum")])
            .enum_values([("color", vec!["red", "green", "blue"])])
            .build()
            .unwrap();

        assert_eq!(config.delimiter(), b';');
        assert!(config.empty_null());
        assert!(config.ignore_empty_lines());
        assert_eq!(config.column_type("age"), Some(ColumnType::Int));
        assert_eq!(config.column_type("color"), Some(ColumnType::Enum));
        assert_eq!(config.column_type("name"), None);
        assert_eq!(
            config.enum_values("color"),
            Some(&["red".to_string(), "green".to_string(), "blue".to_string()][..])
        );
        assert!(config.ignored_enum_columns().is_empty());
    }

    #[test]
    fn test_unknown_type_name() {
        let err = CsvConfig::builder()
            .types([("age", "bigint")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownColumnType {
                column: "age".to_string(),
                type_name: "bigint".to_string(),
            }
        );
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = CsvConfig::builder().delimiter(0xE9).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidDelimiter("0xe9".to_string()));

        assert!(CsvConfig::builder().delimiter(b'\t').build().is_ok());
    }

    #[test]
    fn test_enum_values_without_enum_type() {
        let config = CsvConfig::builder()
            .types([("size", "string")])
            .enum_values([("size", vec!["s", "m"]), ("shape", vec!["round"])])
            .build()
            .unwrap();

        assert_eq!(config.ignored_enum_columns(), vec!["shape", "size"]);
        // Still retrievable; the loader decides to ignore them.
        assert_eq!(config.enum_values("size").map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_reader_builder_uses_delimiter() {
        let config = CsvConfig::builder().delimiter(b'|').build().unwrap();
        let mut reader = config
            .reader_builder()
            .from_reader("a|b\n1|2\n".as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.iter().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: CsvConfig = serde_json::from_str(
            r#"{
                "delimiter": "\t",
                "empty_null": true,
                "types": {"age": "integer", "color": "enum"},
                "enum_values": {"color": ["red", "blue"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.delimiter(), b'\t');
        assert!(config.empty_null());
        assert!(!config.ignore_empty_lines());
        assert_eq!(config.column_type("age"), Some(ColumnType::Int));
        assert_eq!(config.enum_values("color").map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_deserialize_defaults_and_errors() {
        let config: CsvConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CsvConfig::default());

        assert!(serde_json::from_str::<CsvConfig>(r#"{"delimiter": ";;"}"#).is_err());
        assert!(serde_json::from_str::<CsvConfig>(r#"{"delimiter": "é"}"#).is_err());
        assert!(serde_json::from_str::<CsvConfig>(r#"{"types": {"a": "blob"}}"#).is_err());
    }
}
