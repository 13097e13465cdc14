use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("member not found: {0}")]
    MemberNotFound(u64),
    #[error("storage error: {0}")]
    StorageError(String),
}
