//! clx-scorecard
//!
//! Five-pillar scorecard aggregation. Substituting a baseline for a pillar
//! that was never assessed is left to the caller.

pub mod aggregate;
pub mod weights;

pub use aggregate::{breakdown, calculate_overall_score};
pub use weights::{PILLAR_WEIGHTS, weight};
