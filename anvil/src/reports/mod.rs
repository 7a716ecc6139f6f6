//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod fields;
mod list;
mod output;

pub use check::CheckReport;
pub use fields::FieldsReport;
pub use list::{GeneratorLine, ListReport};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
