//! Library side of the `riv-typegen` command.

pub mod logging;
pub mod pipeline;
