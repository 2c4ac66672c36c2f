use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Table of contents generation runs last in every build, so a template
    /// without one cannot be built.
    #[error("Document template has no table of contents; add one before building")]
    MissingTableOfContents,

    #[error("Unknown document part group '{0}'")]
    UnknownPartGroup(String),
}
