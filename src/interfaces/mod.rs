//! User-facing entry points: the batch form model and the command line

#[cfg(feature = "cli")]
pub mod cli;
pub mod form;
