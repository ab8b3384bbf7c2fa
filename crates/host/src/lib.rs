//! Host glue: configuration, high score persistence and logging.
//!
//! Everything that touches the process environment or the filesystem lives
//! here so the core stays pure.

pub mod config;
pub mod logging;
pub mod score_file;

pub use bblock_core as core;
pub use bblock_types as types;

pub use config::GameConfig;
pub use score_file::FileHighScoreStore;
