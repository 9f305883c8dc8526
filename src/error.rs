use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Not in a git repository")]
    NotInRepository,

    #[error("Failed to list local branches: {0}")]
    BranchEnumeration(#[source] git2::Error),

    #[error("Failed to read working copy status: {0}")]
    Status(#[source] git2::Error),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("Terminal error: {0}")]
    Terminal(#[source] Box<dyn std::error::Error + Send + Sync>),
}
