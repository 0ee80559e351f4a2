//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one path so the binary, the
//! integration tests and the benches share `blockfall::{core,input,session,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_session as session;
pub use blockfall_term as term;
pub use blockfall_types as types;
