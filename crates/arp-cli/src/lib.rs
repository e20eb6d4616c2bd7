//! Library side of the `arp` command-line tool.

pub mod logging;
pub mod render;
pub mod script;
