//! CLI command implementations.

mod chain;
mod locales;
mod manifest;
mod resolve;
mod system;

pub use chain::{run_chain, ChainArgs};
pub use locales::{run_locales, LocalesArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use system::run_system;
