//! d20 check resolver with a fate die.
//!
//! A check rolls a d20 plus a situational modifier against a threshold set
//! by the level gap, then rolls a fate die that refines the success or
//! failure into a narrative answer ("yes, and", "no, but", ...). The
//! resolver is stateless; randomness is always passed in by the caller.

pub mod batch;
pub mod check;
pub mod config;
pub mod dice;
pub mod error;
pub mod export;
pub mod outcome;
pub mod record;

pub use batch::{NumberedRoll, RollBatch, RollCount, roll_batch};
pub use check::{RollInput, resolve, resolve_faces, threshold};
pub use config::CheckConfig;
pub use dice::{Die, FateDie};
pub use error::{CheckError, CheckResult};
pub use export::{ExportFormat, export};
pub use outcome::{BaseOutcome, FinalOutcome, OutcomeStyle};
pub use record::RollRecord;
