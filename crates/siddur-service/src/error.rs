use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Calendar(#[from] siddur_luach::CalendarError),

    #[error("Markup error: {0}")]
    Markup(#[from] siddur_markup::ParseError),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Duplicate document id: {0}")]
    DuplicateDocument(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
