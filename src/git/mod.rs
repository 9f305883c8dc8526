mod repository;
mod types;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::Result;

pub use repository::GitRepository;
pub use types::{BranchName, StatusCode, StatusEntry, WorktreeStatus};

/// Produces the ordered list of local branches
pub trait BranchSource {
    fn local_branches(&self) -> Result<Vec<BranchName>>;
}

/// Produces a status snapshot of the working copy against HEAD
pub trait WorktreeInspector {
    fn worktree_status(&self) -> Result<WorktreeStatus>;
}

/// Switches the working copy to another branch
pub trait Checkout {
    fn checkout(&self, branch: &BranchName) -> std::result::Result<(), CheckoutError>;
}

/// Checkout failures that are reported to the user instead of aborting
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("local changes would be overwritten")]
    Conflict { paths: Vec<String> },

    #[error("branch not found: {0}")]
    NotFound(BranchName),

    /// HEAD of another worktree already points at the branch
    #[error("branch {branch} is checked out at {}", .path.display())]
    InUse { branch: BranchName, path: PathBuf },

    #[error(transparent)]
    Git(#[from] git2::Error),
}
