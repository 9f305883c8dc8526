use std::fmt;

/// Name of a local branch, as returned by the branch source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BranchName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Short status of a modified path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Added,
    Modified,
    Deleted,
    Renamed,
    TypeChange,
    Untracked,
    Conflicted,
}

impl StatusCode {
    /// Porcelain-like code
    pub fn as_code(&self) -> &'static str {
        match self {
            StatusCode::Added => "A",
            StatusCode::Modified => "M",
            StatusCode::Deleted => "D",
            StatusCode::Renamed => "R",
            StatusCode::TypeChange => "T",
            StatusCode::Untracked => "??",
            StatusCode::Conflicted => "U",
        }
    }

    /// Collapse git2 status flags into a single code.
    /// Returns None for clean or ignored entries.
    pub fn from_git(status: git2::Status) -> Option<Self> {
        use git2::Status;

        if status.is_empty() || status.contains(Status::IGNORED) {
            return None;
        }
        if status.contains(Status::CONFLICTED) {
            return Some(StatusCode::Conflicted);
        }
        if status.intersects(Status::INDEX_DELETED | Status::WT_DELETED) {
            return Some(StatusCode::Deleted);
        }
        if status.intersects(Status::INDEX_RENAMED | Status::WT_RENAMED) {
            return Some(StatusCode::Renamed);
        }
        if status.intersects(Status::INDEX_TYPECHANGE | Status::WT_TYPECHANGE) {
            return Some(StatusCode::TypeChange);
        }
        if status.contains(Status::INDEX_NEW) {
            return Some(StatusCode::Added);
        }
        if status.contains(Status::WT_NEW) {
            return Some(StatusCode::Untracked);
        }
        Some(StatusCode::Modified)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A modified path in the working copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub path: String,
    pub code: StatusCode,
}

/// Snapshot of working copy modifications, in the order git reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    entries: Vec<StatusEntry>,
}

impl WorktreeStatus {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }
}

impl<P: Into<String>> FromIterator<(P, StatusCode)> for WorktreeStatus {
    fn from_iter<I: IntoIterator<Item = (P, StatusCode)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, code)| StatusEntry {
                    path: path.into(),
                    code,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Status;

    #[test]
    fn test_branch_name_display() {
        let name = BranchName::from("feature/login");
        assert_eq!(name.to_string(), "feature/login");
        assert_eq!(name.as_str(), "feature/login");
    }

    #[test]
    fn test_status_code_from_git() {
        assert_eq!(StatusCode::from_git(Status::CURRENT), None);
        assert_eq!(StatusCode::from_git(Status::IGNORED), None);
        assert_eq!(StatusCode::from_git(Status::WT_NEW), Some(StatusCode::Untracked));
        assert_eq!(StatusCode::from_git(Status::INDEX_NEW), Some(StatusCode::Added));
        assert_eq!(StatusCode::from_git(Status::WT_MODIFIED), Some(StatusCode::Modified));
        assert_eq!(
            StatusCode::from_git(Status::INDEX_MODIFIED | Status::WT_DELETED),
            Some(StatusCode::Deleted)
        );
        assert_eq!(StatusCode::from_git(Status::CONFLICTED), Some(StatusCode::Conflicted));
    }

    #[test]
    fn test_status_code_as_code() {
        assert_eq!(StatusCode::Modified.as_code(), "M");
        assert_eq!(StatusCode::Untracked.as_code(), "??");
    }

    #[test]
    fn test_worktree_status_keeps_order() {
        let status: WorktreeStatus = [
            ("z.txt", StatusCode::Modified),
            ("a.txt", StatusCode::Untracked),
        ]
        .into_iter()
        .collect();

        assert!(!status.is_clean());
        assert_eq!(status.entries()[1].code, StatusCode::Untracked);
        assert_eq!(status.paths().collect::<Vec<_>>(), vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn test_worktree_status_default_is_clean() {
        assert!(WorktreeStatus::default().is_clean());
    }
}
