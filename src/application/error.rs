use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// BookIdとして解釈できないID。どのBookにも一致しない。
    #[error("book not found: {0}")]
    UnknownId(String),
}

impl AppError {
    /// クライアント向けの安定したエラーコード。
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::BookNotFound(_)) | AppError::UnknownId(_) => "NOT_FOUND",
        }
    }
}
