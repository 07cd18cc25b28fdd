//! Statement text builder.
//!
//! [`Stmt`] accumulates the raw text of a SQL statement, delegating every
//! identifier-safety decision to the quoting capability it acquired from its
//! session. It assembles text only — parameter binding, execution, and result
//! mapping belong to whatever consumes the finished string.
//!
//! # Example
//!
//! ```
//! use pgstmt::{stmt, ColumnRef, PgQuoter};
//!
//! # fn demo() -> pgstmt::StmtResult<()> {
//! let session = PgQuoter::default();
//! let mut s = stmt(&session)?;
//! s.push("SELECT ")
//!     .push_column(&ColumnRef::new("patient", "id")?)?
//!     .push(" FROM ")
//!     .push_ident("patient")?
//!     .push(" LIMIT ")
//!     .push_int(10);
//! assert_eq!(s.to_sql(), r#"SELECT "patient"."id" FROM "patient" LIMIT 10"#);
//! # Ok(()) }
//! # demo().unwrap();
//! ```

mod builder;


pub use builder::Stmt;

use crate::error::StmtResult;
use crate::session::QuoteSession;

/// Start building a SQL statement against `session`.
pub fn stmt(session: &impl QuoteSession) -> StmtResult<Stmt<'_>> {
    Stmt::new(session)
}
