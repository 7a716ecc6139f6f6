//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Schema file name, or the built-in marker.
    pub config_name: String,
    /// Declared config type.
    pub config_type: Option<String>,
    /// Validation issues, in key order.
    pub issues: Vec<String>,
    /// Number of generation keys the type requires.
    pub generators: usize,
    /// Keys set to `false`.
    pub disabled: Vec<String>,
    /// Aggregate names and member counts.
    pub aggregates: Vec<(String, usize)>,
}

impl CheckReport {
    /// Whether the check passed (no issues).
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for issue in &self.issues {
            out.error(issue);
        }

        if !self.is_valid() {
            out.newline();
            out.preformatted(&format!("✗ {} is invalid", self.config_name));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_name));
        out.newline();
        out.key_value_indented(
            "config type",
            self.config_type.as_deref().unwrap_or("unknown"),
        );

        let generators = if self.disabled.is_empty() {
            self.generators.to_string()
        } else {
            format!("{} ({} disabled)", self.generators, self.disabled.len())
        };
        out.key_value_indented("generators", &generators);

        let aggregates: Vec<String> = self
            .aggregates
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        out.key_value_indented("aggregates", &aggregates.join(", "));
    }
}
