//! Built-in strategies, in default resolution order.

mod in_process;
mod raw;
mod sandbox;

pub use in_process::InProcessStrategy;
pub use raw::RawParserStrategy;
pub use sandbox::SandboxStrategy;
