//! CLI command implementations

mod build;
mod files;
mod validate;

pub use build::{build, BuildArgs};
pub use files::files;
pub use validate::validate;
