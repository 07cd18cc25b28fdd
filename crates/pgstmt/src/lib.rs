//! # pgstmt
//!
//! An identifier-safe SQL statement text builder for PostgreSQL.
//!
//! ## Features
//!
//! - **Text assembly only**: accumulates statement text; binding, execution,
//!   and result mapping stay in your database layer
//! - **Dialect-safe identifiers**: every table and column name goes through a
//!   quoting capability acquired from the session
//! - **Scoped capability**: the quoter is a guard returned to its session on
//!   every exit path, early return and error included
//! - **Session-agnostic**: works against a `tokio_postgres::Client`, a
//!   transaction, a pooled client, or a standalone [`PgQuoter`]
//!
//! ## Example
//!
//! ```
//! use pgstmt::{stmt, ColumnRef, PgQuoter};
//!
//! # fn demo() -> pgstmt::StmtResult<()> {
//! let session = PgQuoter::default();
//!
//! let mut s = stmt(&session)?;
//! s.push("UPDATE ")
//!     .push_ident("patient")?
//!     .push(" SET ")
//!     .push_column(&ColumnRef::bare("version")?)?
//!     .push(" = ")
//!     .push_int(2);
//!
//! assert_eq!(s.finish(), r#"UPDATE "patient" SET "version" = 2"#);
//! # Ok(()) }
//! # demo().unwrap();
//! ```

pub mod column;
pub mod error;
pub mod quote;
pub mod session;
pub mod stmt;

pub use column::ColumnRef;
pub use error::{StmtError, StmtResult};
pub use quote::{IdentQuoter, PgQuoter, QuoteMode};
pub use session::{QuoteSession, QuoterGuard};
pub use stmt::{Stmt, stmt};
