//! Branch handle and chronological history walker.
//!
//! [`Branch::open`] resolves a location against the backend. A location that
//! is not a repository produces an *absent* handle — a normal, checkable
//! outcome, not an error; any other backend failure propagates. A present
//! handle walks its linear history oldest first, pairing every revision with
//! its immediate predecessor.

use crate::core::backend::{GitBackend, RevisionId, VcsBackend};
use crate::core::error::{GitwcError, Result};
use crate::core::revision::RevisionView;
use std::path::Path;

pub struct Branch {
    backend: Option<GitBackend>,
}

impl Branch {
    /// Open the branch at `location`.
    ///
    /// Returns an absent handle when the location is not a git repository.
    /// I/O, permission and corruption failures are fatal and propagate.
    pub fn open<P: AsRef<Path>>(location: P) -> Result<Self> {
        Ok(Branch {
            backend: GitBackend::open(location)?,
        })
    }

    pub fn is_present(&self) -> bool {
        self.backend.is_some()
    }

    /// Walk the branch history oldest first.
    ///
    /// # Errors
    ///
    /// Fails fast with [`GitwcError::BranchAbsent`] on an absent handle —
    /// check [`is_present`](Self::is_present) before walking. It never
    /// answers an absent handle with an empty history.
    pub fn history(&self) -> Result<History<'_, GitBackend>> {
        let backend = self.backend.as_ref().ok_or(GitwcError::BranchAbsent)?;
        History::new(backend)
    }
}

/// Iterator over [`RevisionView`]s in ascending chronological order.
///
/// Each view carries the identifier of the revision immediately preceding it
/// in this same walk; the root revision carries none.
pub struct History<'a, B: VcsBackend> {
    backend: &'a B,
    ids: std::vec::IntoIter<RevisionId>,
    prev: Option<RevisionId>,
}

impl<'a, B: VcsBackend> History<'a, B> {
    pub fn new(backend: &'a B) -> Result<Self> {
        Ok(History {
            backend,
            ids: backend.revision_history()?.into_iter(),
            prev: None,
        })
    }
}

impl<'a, B: VcsBackend> Iterator for History<'a, B> {
    type Item = RevisionView<'a, B>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        let view = RevisionView::new(self.backend, id.clone(), self.prev.take());
        self.prev = Some(id);
        Some(view)
    }
}
