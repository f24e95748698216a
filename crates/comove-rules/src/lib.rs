//! # comove-rules
//!
//! Narrows the collaborator's rules by lift and by selected antecedents,
//! renders them as text, and drives one analysis session per upload.

pub mod analysis;
pub mod filter;
pub mod outcome;
pub mod render;

pub use analysis::Analysis;
pub use outcome::MiningOutcome;
pub use render::RenderedRule;
