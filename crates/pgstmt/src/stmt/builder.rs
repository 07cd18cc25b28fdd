use crate::column::ColumnRef;
use crate::error::StmtResult;
use crate::quote::IdentQuoter;
use crate::session::{QuoteSession, QuoterGuard};

/// An in-progress textual SQL statement.
///
/// The buffer is append-only: no operation removes or rewrites previously
/// appended content. A failing identifier append leaves the buffer exactly
/// as it was before the call.
///
/// The quoting capability is held for the builder's whole lifetime and goes
/// back to the session when the builder is dropped or [`finish`](Stmt::finish)ed.
#[must_use]
pub struct Stmt<'a> {
    buf: String,
    quoter: QuoterGuard<'a>,
}

// The boxed quoter has no Debug bound, so derive is not an option here.
impl std::fmt::Debug for Stmt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stmt")
            .field("buf", &self.buf)
            .finish_non_exhaustive()
    }
}

impl<'a> Stmt<'a> {
    /// Create a builder, acquiring a quoting capability from `session`.
    pub fn new(session: &'a impl QuoteSession) -> StmtResult<Self> {
        Ok(Self::with_quoter(session.acquire_quoter()?))
    }

    /// Create a builder around an already-acquired capability.
    pub fn with_quoter(quoter: QuoterGuard<'a>) -> Self {
        Self {
            buf: String::new(),
            quoter,
        }
    }

    /// Append raw text verbatim. No escaping, no validation: the caller is
    /// responsible for keyword and literal correctness.
    pub fn push(&mut self, raw: &str) -> &mut Self {
        self.buf.push_str(raw);
        self
    }

    /// Append the decimal form of an integer.
    pub fn push_int(&mut self, value: i64) -> &mut Self {
        // Longest i64 is 20 chars including the sign.
        let mut digits = [0u8; 20];
        let mut pos = digits.len();
        let negative = value < 0;
        let mut n = value.unsigned_abs();
        loop {
            pos -= 1;
            digits[pos] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        if negative {
            self.buf.push('-');
        }
        // SAFETY: digits[pos..] only contains ASCII digits.
        self.buf
            .push_str(unsafe { std::str::from_utf8_unchecked(&digits[pos..]) });
        self
    }

    /// Quote one identifier through the held capability, tracing failures.
    ///
    /// The raw name is elided to its length in the trace event to keep user
    /// input out of logs.
    fn quote(&self, name: &str) -> StmtResult<String> {
        self.quoter.quote(name).inspect_err(|_| {
            tracing::trace!(len = name.len(), "identifier quoting failed");
        })
    }

    /// Append `name` as a safely delimited identifier.
    ///
    /// The quoted form is produced before the buffer is touched, so a
    /// failure leaves prior content unchanged.
    pub fn push_ident(&mut self, name: &str) -> StmtResult<&mut Self> {
        let quoted = self.quote(name)?;
        self.buf.push_str(&quoted);
        Ok(self)
    }

    /// Append a column reference: `<quoted table>.<quoted column>` when the
    /// reference is qualified, `<quoted column>` otherwise.
    ///
    /// Both parts are quoted before the buffer is touched, so a failure on
    /// either leaves prior content unchanged.
    pub fn push_column(&mut self, col: &ColumnRef) -> StmtResult<&mut Self> {
        let quoted_column = self.quote(col.column())?;
        if let Some(table) = col.table() {
            let quoted_table = self.quote(table)?;
            self.buf.push_str(&quoted_table);
            self.buf.push('.');
        }
        self.buf.push_str(&quoted_column);
        Ok(self)
    }

    /// Append a comma-separated list of column references.
    ///
    /// Columns appended before a failing element remain in the buffer.
    pub fn push_columns<'c>(
        &mut self,
        cols: impl IntoIterator<Item = &'c ColumnRef>,
    ) -> StmtResult<&mut Self> {
        for (i, col) in cols.into_iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_column(col)?;
        }
        Ok(self)
    }

    /// Snapshot of the accumulated text.
    ///
    /// Does not alter builder state; successive calls without intervening
    /// appends return identical strings.
    pub fn to_sql(&self) -> String {
        self.buf.clone()
    }

    /// Finish building: release the quoting capability and return the text.
    pub fn finish(self) -> String {
        self.buf
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
