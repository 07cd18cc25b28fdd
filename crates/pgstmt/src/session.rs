//! Session trait and the scoped quoting capability.
//!
//! A [`QuoteSession`] is anything that can hand out a dialect-aware
//! identifier quoter: a live `tokio_postgres::Client`, a transaction, a
//! pooled client, or a standalone [`PgQuoter`](crate::PgQuoter) for offline
//! assembly and tests. The capability comes back as a [`QuoterGuard`], a
//! scoped resource that is returned to the session when dropped — on every
//! exit path, early return and error included.

use crate::error::{StmtError, StmtResult};
use crate::quote::{IdentQuoter, PgQuoter};

/// A source of scoped identifier-quoting capabilities.
///
/// This unifies direct clients, transactions, and pooled clients so callers
/// building statement text stay generic over where the connection came from.
pub trait QuoteSession {
    /// Acquire a quoting capability scoped to this session.
    ///
    /// Fails with [`StmtError::Acquire`] when the session cannot supply one,
    /// e.g. the underlying connection is closed.
    fn acquire_quoter(&self) -> StmtResult<QuoterGuard<'_>>;
}

/// A scoped identifier-quoting capability.
///
/// Holds the dialect quoter plus an optional release hook that runs exactly
/// once when the guard is dropped. Dropping the guard is the release; the
/// consuming [`release`](QuoterGuard::release) method exists for making the
/// hand-back explicit at a call site.
pub struct QuoterGuard<'a> {
    quoter: Box<dyn IdentQuoter + Send + Sync + 'a>,
    on_release: Option<Box<dyn FnOnce() + Send + 'a>>,
}

impl<'a> QuoterGuard<'a> {
    /// Wrap a quoter with no release hook.
    pub fn new(quoter: impl IdentQuoter + Send + Sync + 'a) -> Self {
        tracing::trace!("quoting capability acquired");
        Self {
            quoter: Box::new(quoter),
            on_release: None,
        }
    }

    /// Wrap a quoter with a hook invoked exactly once on release.
    pub fn with_release(
        quoter: impl IdentQuoter + Send + Sync + 'a,
        on_release: impl FnOnce() + Send + 'a,
    ) -> Self {
        tracing::trace!("quoting capability acquired");
        Self {
            quoter: Box::new(quoter),
            on_release: Some(Box::new(on_release)),
        }
    }

    /// Release the capability back to its session.
    ///
    /// Equivalent to dropping the guard; consuming `self` makes a second
    /// release unrepresentable.
    pub fn release(self) {}
}

impl IdentQuoter for QuoterGuard<'_> {
    fn quote(&self, raw: &str) -> StmtResult<String> {
        self.quoter.quote(raw)
    }
}

impl Drop for QuoterGuard<'_> {
    fn drop(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
        tracing::trace!("quoting capability released");
    }
}

/// A standalone [`PgQuoter`] is its own session. Acquisition never fails;
/// there is no connection to hand the capability back to.
impl QuoteSession for PgQuoter {
    fn acquire_quoter(&self) -> StmtResult<QuoterGuard<'_>> {
        Ok(QuoterGuard::new(*self))
    }
}

impl QuoteSession for tokio_postgres::Client {
    fn acquire_quoter(&self) -> StmtResult<QuoterGuard<'_>> {
        if self.is_closed() {
            return Err(StmtError::acquire("connection is closed"));
        }
        Ok(QuoterGuard::new(PgQuoter::default()))
    }
}

/// A transaction only exists on a live connection, so acquisition cannot
/// fail here.
impl QuoteSession for tokio_postgres::Transaction<'_> {
    fn acquire_quoter(&self) -> StmtResult<QuoterGuard<'_>> {
        Ok(QuoterGuard::new(PgQuoter::default()))
    }
}

#[cfg(feature = "pool")]
impl QuoteSession for deadpool_postgres::Client {
    fn acquire_quoter(&self) -> StmtResult<QuoterGuard<'_>> {
        if self.is_closed() {
            return Err(StmtError::acquire("pooled connection is closed"));
        }
        Ok(QuoterGuard::new(PgQuoter::default()))
    }
}
