/// Internal failures. None of these reach the user; callers log and degrade.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Embedded seed asset is not valid JSON
    #[error("invalid seed data: {0}")]
    SeedData(#[from] serde_json::Error),

    #[error("duplicate seed id: {0}")]
    DuplicateSeedId(String),

    /// No element to mount the app into
    #[error("mount point not found: {0}")]
    MountPoint(String),
}

pub type AppResult<T> = Result<T, AppError>;
