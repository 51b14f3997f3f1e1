//! twenty48 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `twenty48::{core, replay, types}`; the implementation lives in `crates/`.

pub use twenty48_core as core;
pub use twenty48_replay as replay;
pub use twenty48_types as types;
