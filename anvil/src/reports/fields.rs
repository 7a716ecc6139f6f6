//! Fields command report data structures.

use anvil_core::FieldDescriptor;

use super::output::{Output, Report};

/// Normalized view of a compact field list.
#[derive(Debug)]
pub struct FieldsReport {
    pub fields: Vec<FieldDescriptor>,
    /// The list written back in compact notation.
    pub compact: String,
}

impl Report for FieldsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.fields.is_empty() {
            out.preformatted("No fields");
            return;
        }

        out.section("Fields");
        for field in &self.fields {
            let mut flags = Vec::new();
            flags.push(if field.required { "required" } else { "nullable" });
            if !field.writable {
                flags.push("readonly");
            }
            if !field.readable {
                flags.push("writeonly");
            }
            let mut value = format!("{} ({})", field.ty, flags.join(", "));
            if !field.decorators.is_empty() {
                value.push_str(&format!(" [{}]", field.decorators.join(", ")));
            }
            out.key_value_indented(&field.name, &value);
        }
        out.newline();
        out.key_value("Normalized", &self.compact);
    }
}
