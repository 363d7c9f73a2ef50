//! One point in branch history with lazily computed, memoized statistics.
//!
//! A [`RevisionView`] pairs a revision with its immediate predecessor in the
//! walk and derives everything else on demand: tree snapshots, metadata,
//! the tracked-file list with per-file metrics, and the diffstat against the
//! previous tree. Every derived value is computed at most once per instance;
//! repeated access returns the cached result without further backend calls.
//!
//! The memo fields are plain interior-mutability cells: a walk is sequential
//! and views are not shared across threads, so single-writer-once holds by
//! construction.

use crate::core::backend::{RevisionId, RevisionMetadata, TreeId, VcsBackend};
use crate::core::diffstat::{DiffClassifier, DiffStat};
use crate::core::error::{GitwcError, Result};
use crate::core::metrics::FileHandle;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::cell::{Cell, RefCell};

pub struct RevisionView<'a, B: VcsBackend> {
    backend: &'a B,
    id: RevisionId,
    prev_id: Option<RevisionId>,

    tree: RefCell<Option<TreeId>>,
    prev_tree: RefCell<Option<TreeId>>,
    metadata: RefCell<Option<RevisionMetadata>>,
    number: Cell<Option<u64>>,
    files: RefCell<Option<Vec<FileHandle>>>,
    diffstat: Cell<Option<DiffStat>>,
}

impl<'a, B: VcsBackend> RevisionView<'a, B> {
    pub(crate) fn new(backend: &'a B, id: RevisionId, prev_id: Option<RevisionId>) -> Self {
        RevisionView {
            backend,
            id,
            prev_id,
            tree: RefCell::new(None),
            prev_tree: RefCell::new(None),
            metadata: RefCell::new(None),
            number: Cell::new(None),
            files: RefCell::new(None),
            diffstat: Cell::new(None),
        }
    }

    pub fn id(&self) -> &RevisionId {
        &self.id
    }

    /// Identifier of the revision immediately preceding this one in the
    /// walk, or `None` for the root revision.
    pub fn previous_id(&self) -> Option<&RevisionId> {
        self.prev_id.as_ref()
    }

    /// Tree snapshot recorded by this revision.
    pub fn tree(&self) -> Result<TreeId> {
        if let Some(tree) = self.tree.borrow().as_ref() {
            return Ok(tree.clone());
        }
        let tree = self.backend.resolve_tree(&self.id)?;
        *self.tree.borrow_mut() = Some(tree.clone());
        Ok(tree)
    }

    /// Tree snapshot of the predecessor, or the empty-tree sentinel for the
    /// root revision — the first diffstat is computed against zero files.
    pub fn previous_tree(&self) -> Result<TreeId> {
        if let Some(tree) = self.prev_tree.borrow().as_ref() {
            return Ok(tree.clone());
        }
        let tree = match &self.prev_id {
            Some(prev) => self.backend.resolve_tree(prev)?,
            None => TreeId::Empty,
        };
        *self.prev_tree.borrow_mut() = Some(tree.clone());
        Ok(tree)
    }

    /// Backend-assigned sequence number, strictly increasing along the walk.
    pub fn sequence_number(&self) -> Result<u64> {
        if let Some(number) = self.number.get() {
            return Ok(number);
        }
        let number = self.backend.revision_number(&self.id)?;
        self.number.set(Some(number));
        Ok(number)
    }

    /// Commit instant in the offset it was recorded at.
    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>> {
        let meta = self.metadata()?;
        let offset = FixedOffset::east_opt(meta.offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
        offset
            .timestamp_opt(meta.timestamp, 0)
            .single()
            .ok_or_else(|| GitwcError::timestamp_out_of_range(meta.timestamp, meta.offset_minutes))
    }

    /// Backend-normalized author string.
    pub fn author(&self) -> Result<String> {
        Ok(self.metadata()?.author)
    }

    /// Tracked files of this revision's tree, each with eagerly computed
    /// metrics. The list reflects the current tree only: a file deleted in
    /// this revision does not appear here, though its removed lines still
    /// show up in [`diffstat`](Self::diffstat).
    pub fn files(&self) -> Result<Vec<FileHandle>> {
        if let Some(files) = self.files.borrow().as_ref() {
            return Ok(files.clone());
        }
        let tree = self.tree()?;
        let files: Vec<FileHandle> = self
            .backend
            .list_files(&tree)?
            .iter()
            .map(|file| FileHandle::new(self.backend, &tree, file))
            .collect();
        *self.files.borrow_mut() = Some(files.clone());
        Ok(files)
    }

    /// Added/removed line counts against the previous tree. The diff is
    /// generated and classified once; later calls return the memoized counts
    /// without touching the backend.
    pub fn diffstat(&self) -> Result<DiffStat> {
        if let Some(stats) = self.diffstat.get() {
            return Ok(stats);
        }

        let text = self.backend.diff_text(&self.previous_tree()?, &self.tree()?)?;
        log::trace!("diff for revision {}:\n{text}", self.id);

        let mut classifier = DiffClassifier::new();
        classifier.write(&text);
        let stats = classifier.stats();

        self.diffstat.set(Some(stats));
        Ok(stats)
    }

    fn metadata(&self) -> Result<RevisionMetadata> {
        if let Some(meta) = self.metadata.borrow().as_ref() {
            return Ok(meta.clone());
        }
        let meta = self.backend.revision_metadata(&self.id)?;
        *self.metadata.borrow_mut() = Some(meta.clone());
        Ok(meta)
    }
}
