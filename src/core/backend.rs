//! Version-control backend abstraction and its git2 implementation.
//!
//! The statistics engine never talks to libgit2 directly; it goes through the
//! [`VcsBackend`] trait so revision views can be exercised against a test
//! double. [`GitBackend`] is the production implementation on top of the
//! `git2` crate.
//!
//! # Public API
//! - [`VcsBackend`]: The operations the engine needs from a backend
//! - [`GitBackend`]: git2-backed implementation
//! - [`RevisionId`], [`TreeId`], [`FileId`], [`FileRef`], [`RevisionMetadata`]:
//!   opaque token and metadata types exchanged across the seam
//!
//! # Token types
//! Identifiers are opaque owned tokens (object id hex strings for git) rather
//! than borrowed git2 handles, so views and file handles carry no libgit2
//! lifetimes and a fake backend can mint its own tokens freely.

use crate::core::error::{GitwcError, Result};
use git2::{
    DiffFormat, DiffOptions, ErrorCode, ObjectType, Repository, Sort, TreeWalkMode, TreeWalkResult,
};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Opaque, backend-assigned revision identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionId(String);

impl RevisionId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Abbreviate hash-like tokens the way git porcelain does; tokens
        // are opaque, so fall back to the full string when byte 8 is not
        // a character boundary.
        f.write_str(self.0.get(..8).unwrap_or(&self.0))
    }
}

/// Opaque tree snapshot token. `Empty` is the well-defined zero-file
/// sentinel used as the previous tree of the first revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeId {
    Empty,
    Tree(String),
}

impl TreeId {
    pub fn is_empty(&self) -> bool {
        matches!(self, TreeId::Empty)
    }
}

/// Opaque identifier of a file within a tree (blob object id for git).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A (name, file identifier) pair as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub name: String,
    pub id: FileId,
}

/// Raw revision metadata as recorded by the backend: an epoch-seconds
/// timestamp, the UTC offset it was recorded at, and the normalized author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionMetadata {
    pub timestamp: i64,
    pub offset_minutes: i32,
    pub author: String,
}

/// The operations the statistics engine needs from a version-control backend.
///
/// All calls are synchronous and trusted; any failure they report is fatal to
/// the walk (the engine never retries). Implementations must keep revision
/// numbers strictly increasing along the order `revision_history` yields.
pub trait VcsBackend {
    /// Revision identifiers of the branch's linear history, oldest first.
    fn revision_history(&self) -> Result<Vec<RevisionId>>;

    /// Sequence number of a revision; strictly increasing with history order.
    fn revision_number(&self, id: &RevisionId) -> Result<u64>;

    /// Timestamp, UTC offset and author for a revision.
    fn revision_metadata(&self, id: &RevisionId) -> Result<RevisionMetadata>;

    /// Resolve the tree snapshot recorded by a revision.
    fn resolve_tree(&self, id: &RevisionId) -> Result<TreeId>;

    /// Tracked files of a tree, in backend order. The empty tree has none.
    fn list_files(&self, tree: &TreeId) -> Result<Vec<FileRef>>;

    /// Full content of one file as terminator-preserving lines, or `None`
    /// when the file cannot be read from this tree. The read is scoped
    /// entirely inside the call; no lock outlives it.
    fn file_lines(&self, tree: &TreeId, file: &FileId) -> Result<Option<Vec<String>>>;

    /// Size of one file in bytes, or `None` when the backend does not know.
    fn file_size(&self, tree: &TreeId, file: &FileId) -> Result<Option<u64>>;

    /// Unified-diff text between two trees, old side first.
    fn diff_text(&self, old: &TreeId, new: &TreeId) -> Result<String>;
}

/// git2-backed [`VcsBackend`].
///
/// The linear history (HEAD's first-parent chain, oldest first) and the
/// revision-number mapping are materialized once at open time; everything
/// else is resolved on demand.
pub struct GitBackend {
    repo: Repository,
    order: Vec<RevisionId>,
    numbers: HashMap<RevisionId, u64>,
}

impl GitBackend {
    /// Attempt to open the repository containing `location`.
    ///
    /// Returns `Ok(None)` when the location is not inside a git repository —
    /// the caller's checkable absent state. Every other git2 failure is
    /// propagated unchanged.
    pub fn open<P: AsRef<Path>>(location: P) -> Result<Option<Self>> {
        let repo = match Repository::discover(location.as_ref()) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                log::debug!(
                    "no repository found at {}",
                    location.as_ref().display()
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let order = linear_history(&repo)?;
        let numbers = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as u64 + 1))
            .collect();

        Ok(Some(GitBackend {
            repo,
            order,
            numbers,
        }))
    }

    fn find_commit(&self, id: &RevisionId) -> Result<git2::Commit<'_>> {
        let oid = git2::Oid::from_str(id.as_str())?;
        Ok(self.repo.find_commit(oid)?)
    }

    fn find_tree(&self, id: &TreeId) -> Result<Option<git2::Tree<'_>>> {
        match id {
            TreeId::Empty => Ok(None),
            TreeId::Tree(hex) => {
                let oid = git2::Oid::from_str(hex)?;
                Ok(Some(self.repo.find_tree(oid)?))
            }
        }
    }

    fn find_blob(&self, file: &FileId) -> Result<Option<git2::Blob<'_>>> {
        let oid = git2::Oid::from_str(file.as_str())?;
        match self.repo.find_blob(oid) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Walk HEAD's first-parent chain and return it oldest first.
///
/// A repository without any commit (unborn branch) has an empty history.
fn linear_history(repo: &Repository) -> Result<Vec<RevisionId>> {
    // A freshly initialized repository has an unborn HEAD; libgit2 reports
    // pushing it as a generic reference-lookup failure, so check emptiness
    // up front instead of relying on the push error code.
    if repo.is_empty()? {
        return Ok(Vec::new());
    }

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
    revwalk.simplify_first_parent()?;

    match revwalk.push_head() {
        Ok(()) => {}
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    }

    let mut order = Vec::new();
    for oid in revwalk {
        order.push(RevisionId::new(oid?.to_string()));
    }
    Ok(order)
}

impl VcsBackend for GitBackend {
    fn revision_history(&self) -> Result<Vec<RevisionId>> {
        Ok(self.order.clone())
    }

    fn revision_number(&self, id: &RevisionId) -> Result<u64> {
        self.numbers
            .get(id)
            .copied()
            .ok_or_else(|| GitwcError::unknown_revision(id))
    }

    fn revision_metadata(&self, id: &RevisionId) -> Result<RevisionMetadata> {
        let commit = self.find_commit(id)?;
        let time = commit.time();
        let signature = commit.author();

        // Normalize the author to name, then email, then a fixed marker.
        let author = signature
            .name()
            .or_else(|| signature.email())
            .unwrap_or("unknown")
            .to_string();

        Ok(RevisionMetadata {
            timestamp: time.seconds(),
            offset_minutes: time.offset_minutes(),
            author,
        })
    }

    fn resolve_tree(&self, id: &RevisionId) -> Result<TreeId> {
        let commit = self.find_commit(id)?;
        Ok(TreeId::Tree(commit.tree_id().to_string()))
    }

    fn list_files(&self, tree: &TreeId) -> Result<Vec<FileRef>> {
        let Some(tree) = self.find_tree(tree)? else {
            return Ok(Vec::new());
        };

        let mut files = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                let name = String::from_utf8_lossy(entry.name_bytes());
                files.push(FileRef {
                    name: format!("{root}{name}"),
                    id: FileId::new(entry.id().to_string()),
                });
            }
            TreeWalkResult::Ok
        })?;
        Ok(files)
    }

    fn file_lines(&self, _tree: &TreeId, file: &FileId) -> Result<Option<Vec<String>>> {
        let Some(blob) = self.find_blob(file)? else {
            return Ok(None);
        };

        // Terminators stay attached to their line, matching the counting
        // convention in core::metrics.
        let content = String::from_utf8_lossy(blob.content()).into_owned();
        let lines = content.split_inclusive('\n').map(str::to_string).collect();
        Ok(Some(lines))
    }

    fn file_size(&self, _tree: &TreeId, file: &FileId) -> Result<Option<u64>> {
        Ok(self.find_blob(file)?.map(|blob| blob.size() as u64))
    }

    fn diff_text(&self, old: &TreeId, new: &TreeId) -> Result<String> {
        let old_tree = self.find_tree(old)?;
        let new_tree = self.find_tree(new)?;

        let mut opts = DiffOptions::new();
        let diff =
            self.repo
                .diff_tree_to_tree(old_tree.as_ref(), new_tree.as_ref(), Some(&mut opts))?;

        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // Content lines carry their origin marker the way `git diff`
            // prints them; file and hunk headers already contain their own.
            match line.origin() {
                '+' | '-' | ' ' => text.push(line.origin()),
                _ => {}
            }
            text.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;
        Ok(text)
    }
}
