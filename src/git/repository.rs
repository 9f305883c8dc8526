use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{
    BranchType, CheckoutNotificationType, Commit, Delta, ErrorCode, Repository, ResetType,
    StatusOptions, Worktree,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::{BranchName, BranchSource, Checkout, CheckoutError, StatusCode, WorktreeInspector};
use super::{StatusEntry, WorktreeStatus};

/// Branch listing, status and checkout backed by git2
pub struct GitRepository {
    repo: Repository,
    include_untracked: bool,
}

impl GitRepository {
    /// Open the repository containing `path`, walking up parent directories
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => Error::NotInRepository,
            _ => Error::Git(e),
        })?;

        debug!(gitdir = %repo.path().display(), "opened repository");

        Ok(Self {
            repo,
            include_untracked: true,
        })
    }

    /// Whether untracked files make the working copy dirty
    pub fn with_untracked(mut self, include: bool) -> Self {
        self.include_untracked = include;
        self
    }

    /// Working directory of another worktree whose HEAD is `branch`.
    ///
    /// Covers the main working copy when this repository is itself a
    /// linked worktree. Stale or unreadable worktrees are skipped.
    fn worktree_holding(
        &self,
        branch: &BranchName,
    ) -> std::result::Result<Option<PathBuf>, git2::Error> {
        let target = format!("refs/heads/{}", branch.as_str());

        let own_name = if self.repo.is_worktree() {
            let own = Worktree::open_from_repository(&self.repo)?;

            // Linked gitdirs live at <common>/worktrees/<name>
            if let Some(common) = self.repo.path().ancestors().nth(2) {
                if let Ok(main) = Repository::open(common) {
                    if head_target(&main).as_deref() == Some(target.as_str()) {
                        let path = main.workdir().unwrap_or(common).to_path_buf();
                        return Ok(Some(path));
                    }
                }
            }
            own.name().map(str::to_string)
        } else {
            None
        };

        for name in self.repo.worktrees()?.iter().flatten() {
            if own_name.as_deref() == Some(name) {
                continue;
            }
            let Ok(worktree) = self.repo.find_worktree(name) else {
                continue;
            };
            if worktree.validate().is_err() {
                debug!(worktree = name, "skipping stale worktree");
                continue;
            }
            let Ok(linked) = Repository::open_from_worktree(&worktree) else {
                continue;
            };
            if head_target(&linked).as_deref() == Some(target.as_str()) {
                return Ok(Some(worktree.path().to_path_buf()));
            }
        }

        Ok(None)
    }

    /// Undo a tree checkout from `original` to `target` that HEAD never followed
    fn restore(&self, original: &Commit<'_>, target: &Commit<'_>) -> Result<()> {
        self.repo
            .reset(original.as_object(), ResetType::Hard, None)?;

        // Files only the target has are left behind as untracked; the safe
        // checkout never overwrites untracked files, so all of them are ours
        let Some(workdir) = self.repo.workdir() else {
            return Ok(());
        };
        let diff =
            self.repo
                .diff_tree_to_tree(Some(&original.tree()?), Some(&target.tree()?), None)?;
        for delta in diff.deltas().filter(|d| d.status() == Delta::Added) {
            if let Some(path) = delta.new_file().path() {
                std::fs::remove_file(workdir.join(path))?;
            }
        }
        Ok(())
    }
}

/// Ref name HEAD points to, without resolving it
fn head_target(repo: &Repository) -> Option<String> {
    let head = repo.find_reference("HEAD").ok()?;
    head.symbolic_target().map(str::to_string)
}

impl BranchSource for GitRepository {
    fn local_branches(&self) -> Result<Vec<BranchName>> {
        let mut branches = Vec::new();

        let iter = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(Error::BranchEnumeration)?;
        for branch in iter {
            let (branch, _) = branch.map_err(Error::BranchEnumeration)?;
            if let Some(name) = branch.name().map_err(Error::BranchEnumeration)? {
                branches.push(BranchName::from(name));
            }
        }

        debug!(count = branches.len(), "listed local branches");
        Ok(branches)
    }
}

impl WorktreeInspector for GitRepository {
    fn worktree_status(&self) -> Result<WorktreeStatus> {
        if self.repo.is_bare() {
            return Ok(WorktreeStatus::default());
        }

        let mut options = StatusOptions::new();
        options
            .include_untracked(self.include_untracked)
            .recurse_untracked_dirs(self.include_untracked)
            .include_ignored(false)
            .exclude_submodules(true);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .map_err(Error::Status)?;

        let entries = statuses
            .iter()
            .filter_map(|entry| {
                let code = StatusCode::from_git(entry.status())?;
                let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
                Some(StatusEntry { path, code })
            })
            .collect();

        Ok(WorktreeStatus::new(entries))
    }
}

impl Checkout for GitRepository {
    fn checkout(&self, branch: &BranchName) -> std::result::Result<(), CheckoutError> {
        let reference = match self.repo.find_branch(branch.as_str(), BranchType::Local) {
            Ok(b) => b.into_reference(),
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(CheckoutError::NotFound(branch.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        // HEAD cannot point at a branch another worktree owns; refuse before
        // the working copy is touched
        if let Some(path) = self.worktree_holding(branch)? {
            return Err(CheckoutError::InUse {
                branch: branch.clone(),
                path,
            });
        }

        let commit = reference.peel_to_commit()?;
        let original = self.repo.head().and_then(|head| head.peel_to_commit()).ok();

        // Update index and workdir before moving HEAD, refusing to clobber local edits
        let mut conflicts = Vec::new();
        let result = {
            let mut builder = CheckoutBuilder::new();
            builder
                .safe()
                .notify_on(CheckoutNotificationType::CONFLICT)
                .notify(|_, path, _, _, _| {
                    if let Some(path) = path {
                        conflicts.push(path.to_string_lossy().into_owned());
                    }
                    true
                });
            self.repo.checkout_tree(commit.as_object(), Some(&mut builder))
        };

        match result {
            Ok(()) => {}
            Err(e) if e.code() == ErrorCode::Conflict || !conflicts.is_empty() => {
                return Err(CheckoutError::Conflict { paths: conflicts });
            }
            Err(e) => return Err(e.into()),
        }

        if let Err(err) = self
            .repo
            .set_head(&format!("refs/heads/{}", branch.as_str()))
        {
            // The tree already matches the target; put back what HEAD still names
            if let Some(original) = original {
                if let Err(restore_err) = self.restore(&original, &commit) {
                    warn!(error = %restore_err, "failed to restore working copy");
                }
            }
            return Err(err.into());
        }

        Ok(())
    }
}
