//! Common utilities shared across the commscore codebase.
//!
//! Key components:
//! - **Vector math**: Centroids and cosine similarity for embedding vectors
//! - **Text utilities**: Capitalization and list summarizing helpers

pub mod text;
pub mod vector;

pub use text::{capitalize_first, join_first};
pub use vector::{cosine_similarity, mean_vector};
