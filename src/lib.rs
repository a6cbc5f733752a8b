//! confpatch: selective key=value config rewriting
//!
//! Maps an overrides file of `key=value` pairs onto an existing config file,
//! rewriting only settings whose value actually changes and preserving every
//! other line byte for byte. The file is replaced atomically, and only when
//! something changed.

pub mod cli;
pub mod error;
pub mod merge;
pub mod parse;
