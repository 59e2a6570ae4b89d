use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoError {
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    #[error(transparent)]
    Document(#[from] crate::document::DocumentError),

    #[error(transparent)]
    Summarize(#[from] crate::summarize::SummarizeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type MemoResult<T> = Result<T, MemoError>;
