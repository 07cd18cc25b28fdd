//! Column references.

use crate::error::{StmtError, StmtResult};

/// A reference to a database column, optionally qualified by its owning table.
///
/// Immutable once constructed. The column name is never empty; constructors
/// enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    table: Option<String>,
    column: String,
}

impl ColumnRef {
    /// Create a table-qualified column reference.
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> StmtResult<Self> {
        let table = table.into();
        if table.is_empty() {
            return Err(StmtError::validation("Table name cannot be empty"));
        }
        Ok(Self {
            table: Some(table),
            column: Self::checked_column(column)?,
        })
    }

    /// Create an unqualified column reference.
    pub fn bare(column: impl Into<String>) -> StmtResult<Self> {
        Ok(Self {
            table: None,
            column: Self::checked_column(column)?,
        })
    }

    fn checked_column(column: impl Into<String>) -> StmtResult<String> {
        let column = column.into();
        if column.is_empty() {
            return Err(StmtError::validation("Column name cannot be empty"));
        }
        Ok(column)
    }

    /// The owning table name, if qualified.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Unquoted dotted form, for diagnostics and log messages.
    pub fn qualified(&self) -> String {
        match &self.table {
            Some(table) => format!("{}.{}", table, self.column),
            None => self.column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_carries_table() {
        let col = ColumnRef::new("patient", "id").unwrap();
        assert_eq!(col.table(), Some("patient"));
        assert_eq!(col.column(), "id");
        assert_eq!(col.qualified(), "patient.id");
    }

    #[test]
    fn bare_has_no_table() {
        let col = ColumnRef::bare("id").unwrap();
        assert_eq!(col.table(), None);
        assert_eq!(col.qualified(), "id");
    }

    #[test]
    fn rejects_empty_column() {
        assert!(ColumnRef::bare("").is_err());
        assert!(ColumnRef::new("patient", "").is_err());
    }

    #[test]
    fn rejects_empty_table() {
        assert!(ColumnRef::new("", "id").is_err());
    }
}
