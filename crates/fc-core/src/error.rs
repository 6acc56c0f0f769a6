//! Error types for check inputs and batch export.
//!
//! Resolving a roll never fails. These errors come from the opt-in strict
//! constructors and from rendering a batch.

/// Errors raised while validating check inputs or exporting results.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The level gap lies outside the supported range.
    #[error("level gap {0} is out of range ({min}..={max})", min = crate::check::LEVEL_GAP_MIN, max = crate::check::LEVEL_GAP_MAX)]
    InvalidLevelGap(i32),

    /// The situational modifier lies outside the supported range.
    #[error("modifier {0} is out of range ({min}..={max})", min = crate::check::MODIFIER_MIN, max = crate::check::MODIFIER_MAX)]
    InvalidModifier(i32),

    /// The requested number of rolls lies outside the supported range.
    #[error("roll count {0} is out of range ({min}..={max})", min = crate::batch::RollCount::MIN, max = crate::batch::RollCount::MAX)]
    InvalidRollCount(u32),

    /// The export format name was not recognised.
    #[error("unsupported format: \"{0}\". Use: csv, json, markdown")]
    UnknownFormat(String),

    /// The batch could not be encoded as JSON.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
