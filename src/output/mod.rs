//! Table sinks: CSV file and fixed-width console text.

pub mod console;
pub mod csv;

pub use console::*;
pub use csv::*;
