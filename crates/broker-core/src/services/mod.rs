//! Domain services built on top of the ports.

pub mod diagnostics;
