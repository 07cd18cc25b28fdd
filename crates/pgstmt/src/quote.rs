//! Dialect-aware identifier quoting.
//!
//! This module provides [`IdentQuoter`], the single capability the statement
//! builder needs from a database dialect: turn a raw name into a safely
//! delimited identifier. [`PgQuoter`] implements it for PostgreSQL.
//!
//! - Quoted identifiers allow any characters except NUL and escape `"` as `""`
//! - [`QuoteMode::WhenNeeded`] leaves names matching `[a-z_][a-z0-9_$]*` bare
//!
//! # Example
//! ```
//! use pgstmt::{IdentQuoter, PgQuoter};
//!
//! let quoter = PgQuoter::default();
//! assert_eq!(quoter.quote("patient").unwrap(), r#""patient""#);
//! assert_eq!(quoter.quote(r#"has"quote"#).unwrap(), r#""has""quote""#);
//! ```

use crate::error::{StmtError, StmtResult};

/// A dialect-aware identifier quoting capability.
///
/// Implementations know the delimiting and escaping rules of one SQL dialect.
/// The statement builder never inspects identifiers itself; every
/// identifier-safety decision goes through this trait.
pub trait IdentQuoter {
    /// Quote `raw` as a safely delimited identifier.
    ///
    /// Fails with [`StmtError::QuoteIdent`] when `raw` cannot be represented
    /// as an identifier in the active dialect.
    fn quote(&self, raw: &str) -> StmtResult<String>;
}

/// When to wrap identifiers in delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Always delimit, even when the name would be legal bare.
    #[default]
    Always,
    /// Delimit only when the name is not a safe lower-case identifier
    /// (`[a-z_][a-z0-9_$]*`). Bare names pass through unchanged.
    WhenNeeded,
}

/// PostgreSQL identifier quoting: double quotes, `"` escaped as `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgQuoter {
    mode: QuoteMode,
}

impl PgQuoter {
    /// Create a quoter with an explicit [`QuoteMode`].
    pub fn new(mode: QuoteMode) -> Self {
        Self { mode }
    }

    /// The active quoting mode.
    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    /// True when `name` is safe to emit without delimiters.
    ///
    /// Postgres folds unquoted identifiers to lower case, so anything with
    /// upper-case characters must be delimited to keep its spelling.
    fn is_safe_bare(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c == '_' || c.is_ascii_lowercase() => {}
            _ => return false,
        }
        chars.all(|c| c == '_' || c == '$' || c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

impl IdentQuoter for PgQuoter {
    fn quote(&self, raw: &str) -> StmtResult<String> {
        if raw.is_empty() {
            return Err(StmtError::quote_ident("identifier cannot be empty"));
        }
        if raw.contains('\0') {
            return Err(StmtError::quote_ident(
                "identifier cannot contain NUL character",
            ));
        }

        if self.mode == QuoteMode::WhenNeeded && Self::is_safe_bare(raw) {
            return Ok(raw.to_string());
        }

        // Surrounding quotes plus room for doubled escapes.
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('"');
        for ch in raw.chars() {
            if ch == '"' {
                out.push('"');
                out.push('"');
            } else {
                out.push(ch);
            }
        }
        out.push('"');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_reports_configuration() {
        assert_eq!(PgQuoter::default().mode(), QuoteMode::Always);
        assert_eq!(
            PgQuoter::new(QuoteMode::WhenNeeded).mode(),
            QuoteMode::WhenNeeded
        );
    }

    #[test]
    fn always_mode_quotes_simple_name() {
        let q = PgQuoter::default();
        assert_eq!(q.quote("users").unwrap(), r#""users""#);
    }

    #[test]
    fn escapes_embedded_quote() {
        let q = PgQuoter::default();
        assert_eq!(q.quote(r#"has"quote"#).unwrap(), r#""has""quote""#);
    }

    #[test]
    fn preserves_case_inside_quotes() {
        let q = PgQuoter::default();
        assert_eq!(q.quote("CamelCase").unwrap(), r#""CamelCase""#);
    }

    #[test]
    fn when_needed_leaves_safe_name_bare() {
        let q = PgQuoter::new(QuoteMode::WhenNeeded);
        assert_eq!(q.quote("users").unwrap(), "users");
        assert_eq!(q.quote("my_var$1").unwrap(), "my_var$1");
    }

    #[test]
    fn when_needed_quotes_upper_case() {
        let q = PgQuoter::new(QuoteMode::WhenNeeded);
        assert_eq!(q.quote("CamelCase").unwrap(), r#""CamelCase""#);
    }

    #[test]
    fn when_needed_quotes_space() {
        let q = PgQuoter::new(QuoteMode::WhenNeeded);
        assert_eq!(q.quote("my table").unwrap(), r#""my table""#);
    }

    #[test]
    fn when_needed_quotes_leading_digit() {
        let q = PgQuoter::new(QuoteMode::WhenNeeded);
        assert_eq!(q.quote("1table").unwrap(), r#""1table""#);
    }

    #[test]
    fn rejects_empty() {
        let q = PgQuoter::default();
        let err = q.quote("").unwrap_err();
        assert!(err.is_quote_ident());
    }

    #[test]
    fn rejects_nul() {
        let q = PgQuoter::default();
        assert!(q.quote("bad\0name").unwrap_err().is_quote_ident());
    }
}
