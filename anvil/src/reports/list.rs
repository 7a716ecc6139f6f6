//! List command report data structures.

use super::output::{Output, Report};

/// One generation key and what it produces.
#[derive(Debug)]
pub struct GeneratorLine {
    pub key: String,
    /// `template -> directory/filename`, `disabled`, or `incomplete`.
    pub status: String,
}

/// Report data for listing targets.
#[derive(Debug)]
pub struct ListReport {
    pub generators: Vec<GeneratorLine>,
    /// Aggregate names with their members, in declared order.
    pub aggregates: Vec<(String, Vec<String>)>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.generators.is_empty() {
            out.preformatted("No generators defined");
        } else {
            out.section("Generators");
            let width = self.generators.iter().map(|g| g.key.len()).max().unwrap_or(0);
            for line in &self.generators {
                out.list_item(&format!("{:width$}  {}", line.key, line.status));
            }
        }

        if !self.aggregates.is_empty() {
            out.newline();
            out.section("Aggregates");
            for (name, members) in &self.aggregates {
                out.list_item(&format!("{}: {}", name, members.join(", ")));
            }
        }
    }
}
