//! CLI command implementations.
//!
//! - **analyze**: score a text and render the assessment report
//! - **init**: write a default `.commscore.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
