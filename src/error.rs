use folio_idf::TableError;
use folio_template::TemplateError;
use thiserror::Error;

/// Errors raised while loading a manifest or building its document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Manifest is invalid: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
