//! Console prompts, artifact I/O, and chart rendering.

pub mod input;
pub mod io;
pub mod plot;
