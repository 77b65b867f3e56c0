use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::{VisError, VisResult};

/// Data of a single column. All variants hold one entry per table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ColumnData {
    Number(Vec<f64>),
    /// Epoch milliseconds.
    Time(Vec<f64>),
    String(Vec<String>),
    Boolean(Vec<bool>),
}

impl ColumnData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Number(values) | Self::Time(values) => values.len(),
            Self::String(values) => values.len(),
            Self::Boolean(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view of the column, for number and time columns.
    #[must_use]
    pub fn numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Number(values) | Self::Time(values) => Some(values),
            Self::String(_) | Self::Boolean(_) => None,
        }
    }

    #[must_use]
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time(_))
    }

    /// True when every value equals the first one.
    ///
    /// Number comparison is strict: a NaN sample never equals anything, so a
    /// column containing NaN is never constant. Empty columns are constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        fn all_equal_first<T: PartialEq>(values: &[T]) -> bool {
            match values.first() {
                Some(first) => values.iter().all(|value| value == first),
                None => true,
            }
        }

        match self {
            Self::Number(values) | Self::Time(values) => all_equal_first(values),
            Self::String(values) => all_equal_first(values),
            Self::Boolean(values) => all_equal_first(values),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(flatten)]
    pub data: ColumnData,
}

/// Columnar query result: ordered column name -> column data, with one
/// shared row count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: IndexMap<String, Column>,
    length: usize,
}

impl Table {
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column data, or `None` when the column does not exist.
    #[must_use]
    pub fn column_data(&self, name: &str) -> Option<&ColumnData> {
        self.columns.get(name).map(|column| &column.data)
    }

    /// Numeric values of a column, empty when the column is absent or
    /// not numeric.
    #[must_use]
    pub fn numeric_values(&self, name: &str) -> &[f64] {
        self.column_data(name)
            .and_then(ColumnData::numeric)
            .unwrap_or(&[])
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// Validating builder used by query-result parsers.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: IndexMap<String, Column>,
}

impl TableBuilder {
    pub fn column(mut self, name: impl Into<String>, data: ColumnData) -> VisResult<Self> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(VisError::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.values().next() {
            let expected = first.data.len();
            if data.len() != expected {
                return Err(VisError::ColumnLengthMismatch {
                    column: name,
                    expected,
                    actual: data.len(),
                });
            }
        }
        self.columns.insert(name.clone(), Column { name, data });
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Table {
        let length = self
            .columns
            .values()
            .next()
            .map_or(0, |column| column.data.len());
        Table {
            columns: self.columns,
            length,
        }
    }
}

/// A parsed query response: the table plus the union of the group keys of
/// every series it contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FluxTable {
    pub table: Arc<Table>,
    pub group_key_union: IndexSet<String>,
}

impl FluxTable {
    #[must_use]
    pub fn new<I, S>(table: Table, group_key_union: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: Arc::new(table),
            group_key_union: group_key_union.into_iter().map(Into::into).collect(),
        }
    }
}
