/// Pre-flight input errors. Raised before any phase call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("content is empty")]
    EmptyContent,

    #[error("unknown phase: {name}")]
    UnknownPhase { name: String },

    #[error("phase {phase} violates canonical order")]
    PhaseOrderViolation { phase: String },

    #[error("no phases requested")]
    EmptyPhaseOrder,
}
