//! Pocket cube (workspace facade crate).
//!
//! Re-exports the workspace crates as `pocket_cube::{core,input,term,types}`
//! and adds the pieces shared by the binary and the integration tests: the
//! command line, the resolved configuration, one-shot printing and the
//! interactive session.

pub use pocket_cube_core as core;
pub use pocket_cube_input as input;
pub use pocket_cube_term as term;
pub use pocket_cube_types as types;

pub mod cli;
pub mod config;
pub mod print;
pub mod session;
