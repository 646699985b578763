// keg-core/src/error.rs

use crate::domain::error::{DomainError, ErrorKind};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::parser::SyntaxError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum KegError {
    // --- ERREURS DU DOMAINE (validation, intégrité) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, syntaxe, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl KegError {
    /// Domain kind of the failure, `None` for I/O, syntax and config errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(e) => Some(e.kind()),
            Self::Infrastructure(_) => None,
        }
    }
}

impl From<std::io::Error> for KegError {
    fn from(err: std::io::Error) -> Self {
        KegError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<SyntaxError> for KegError {
    fn from(err: SyntaxError) -> Self {
        KegError::Infrastructure(InfrastructureError::Syntax(err))
    }
}
