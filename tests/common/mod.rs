//! Common test utilities
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gbs::git::{
    BranchName, BranchSource, Checkout, CheckoutError, StatusCode, WorktreeInspector,
    WorktreeStatus,
};
use gbs::tui::{Event, EventSource};
use gbs::{Error, Result};
use tempfile::TempDir;

/// Create a temporary git repository for testing
pub struct TestRepo {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a new test repository with one committed file
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().to_path_buf();

        git2::Repository::init(&path).expect("Failed to init repo");

        let repo = Self { dir, path };
        repo.commit_file("README.md", "hello\n", "Initial commit");
        repo
    }

    pub fn open(&self) -> git2::Repository {
        git2::Repository::open(&self.path).unwrap()
    }

    /// Name of the branch HEAD points to
    pub fn head_branch(&self) -> String {
        self.open().head().unwrap().shorthand().unwrap().to_string()
    }

    /// Create a branch at HEAD
    pub fn create_branch(&self, name: &str) {
        let repo = self.open();
        let commit = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch(name, &commit, false).unwrap();
    }

    /// Write a file into the working copy without staging it
    pub fn write_file(&self, name: &str, content: &str) {
        let file = self.path.join(name);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file, content).unwrap();
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).unwrap()
    }

    /// Write, stage and commit a file on the current branch
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write_file(name, content);

        let repo = self.open();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to commit");
    }

    /// Create `branch` at HEAD plus one commit that sets `name` to `content`,
    /// leaving the working copy and HEAD untouched
    pub fn create_branch_with_file(&self, branch: &str, name: &str, content: &str) {
        let repo = self.open();
        let head = repo.head().unwrap().peel_to_commit().unwrap();

        let blob = repo.blob(content.as_bytes()).unwrap();
        let mut builder = repo.treebuilder(Some(&head.tree().unwrap())).unwrap();
        builder.insert(name, blob, 0o100644).unwrap();
        let tree = repo.find_tree(builder.write().unwrap()).unwrap();

        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        repo.commit(
            Some(&format!("refs/heads/{}", branch)),
            &sig,
            &sig,
            &format!("Set {}", name),
            &tree,
            &[&head],
        )
        .unwrap();
    }

    /// Add a linked worktree with `branch` checked out. The worktree lives
    /// under the returned directory, so keep it alive for the whole test.
    pub fn add_worktree(&self, branch: &str) -> (TempDir, PathBuf) {
        let holder = TempDir::new().expect("Failed to create temp dir");
        let path = holder.path().join("wt");

        let repo = self.open();
        let reference = repo
            .find_branch(branch, git2::BranchType::Local)
            .unwrap()
            .into_reference();
        let mut opts = git2::WorktreeAddOptions::new();
        opts.reference(Some(&reference));
        repo.worktree(&format!("wt-{}", branch.replace('/', "-")), &path, Some(&opts))
            .expect("Failed to add worktree");

        (holder, path)
    }

    /// Get the repository path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory repository that records every call
#[derive(Default)]
pub struct FakeRepo {
    pub branches: Vec<BranchName>,
    pub status: WorktreeStatus,
    /// Error returned by the next checkouts, if any
    pub checkout_error: RefCell<Option<CheckoutError>>,
    pub checkouts: RefCell<Vec<BranchName>>,
    pub branch_calls: RefCell<usize>,
}

impl FakeRepo {
    pub fn with_branches(names: &[&str]) -> Self {
        Self {
            branches: names.iter().map(|n| BranchName::from(*n)).collect(),
            ..Default::default()
        }
    }

    pub fn dirty(mut self, paths: &[&str]) -> Self {
        self.status = paths
            .iter()
            .map(|p| (p.to_string(), StatusCode::Modified))
            .collect();
        self
    }

    pub fn failing_with(self, err: CheckoutError) -> Self {
        *self.checkout_error.borrow_mut() = Some(err);
        self
    }

    pub fn checkout_count(&self) -> usize {
        self.checkouts.borrow().len()
    }

    pub fn checked_out(&self) -> Vec<String> {
        self.checkouts
            .borrow()
            .iter()
            .map(|b| b.as_str().to_string())
            .collect()
    }
}

impl BranchSource for FakeRepo {
    fn local_branches(&self) -> Result<Vec<BranchName>> {
        *self.branch_calls.borrow_mut() += 1;
        Ok(self.branches.clone())
    }
}

impl WorktreeInspector for FakeRepo {
    fn worktree_status(&self) -> Result<WorktreeStatus> {
        Ok(self.status.clone())
    }
}

impl Checkout for FakeRepo {
    fn checkout(&self, branch: &BranchName) -> std::result::Result<(), CheckoutError> {
        self.checkouts.borrow_mut().push(branch.clone());
        match self.checkout_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Replays a fixed list of events; fails once they run out
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: keys.into_iter().map(Event::Key).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no more scripted events",
            ))
        })
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn key_char(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn branch_names(names: &[&str]) -> Vec<BranchName> {
    names.iter().map(|n| BranchName::from(*n)).collect()
}
