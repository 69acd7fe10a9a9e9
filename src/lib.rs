//! Interactive daily reflection journal for the terminal. Asks a handful of
//! questions about your day, derives a rough mood reading by matching the
//! answers against small word lexicons, and keeps everything in a plain
//! tabular file that can be read back as aggregate statistics.
//!

pub mod cli;
pub mod journal;
pub mod store;
pub mod utils;
