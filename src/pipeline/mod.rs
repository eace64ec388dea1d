//! The scoring pipeline: collaborator injection, aggregation and feedback.

pub mod aggregator;
pub mod collaborators;
pub mod feedback;

pub use aggregator::{Aggregator, SUGGESTION_UNAVAILABLE};
pub use collaborators::Collaborators;
pub use feedback::build_feedback;
