pub mod entity;
pub mod risk;
pub mod scorecard;
pub mod uwa;
