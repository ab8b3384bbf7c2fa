//! bblock (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can use `bblock::{core,host,input,term,types}`.

pub use bblock_core as core;
pub use bblock_host as host;
pub use bblock_input as input;
pub use bblock_term as term;
pub use bblock_types as types;
