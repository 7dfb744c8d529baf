//! Guard Error Types

/// Boxed error produced by a fallible clear
pub type BoxedClearError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ClearError {
    #[error("Failed to clear {type_name}: {source}")]
    Failed {
        type_name: &'static str,
        #[source]
        source: BoxedClearError,
    },
}

impl ClearError {
    /// Name of the type whose clear failed
    pub fn type_name(&self) -> &'static str {
        match self {
            ClearError::Failed { type_name, .. } => type_name,
        }
    }
}

/// Result type for explicit finalization
pub type ClearResult<T> = Result<T, ClearError>;
