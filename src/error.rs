use thiserror::Error;

// Enum for errors at the engine's persistence and validation boundary. The
// derivation functions themselves are total and never return one of these.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error), // Input/output errors.

    #[error("Invalid player state: {0}")]
    InvalidState(String), // A state record that violates the documented invariants.
}
