//! In-memory link storage
//!
//! Records only live for the lifetime of the process; there is no
//! persistence layer.

pub mod models;
pub mod registry;

pub use models::{
    ClickEvent, DEFAULT_VALIDITY_MINUTES, ShortLinkRecord, ShortLinkRequest, compute_expires_at,
};
pub use registry::{CodeGenerator, RandomCodeGenerator, ShortlinkRegistry};
