//! CLI command implementations

mod config_gen;
mod shorten;

pub use config_gen::config_generate;
pub use shorten::{build_entries, print_stats, shorten_urls};
