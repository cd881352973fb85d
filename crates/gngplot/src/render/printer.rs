use std::io::{self, Write};

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::{GngplotError, config::PrintConfig};

/// Re-serializes a JSON document with indentation.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    indent: Vec<u8>,
}

impl PrettyPrinter {
    pub fn new(config: &PrintConfig) -> Self {
        Self {
            indent: vec![b' '; config.indent()],
        }
    }

    /// Writes `value` to `out` followed by a newline, keeping key order.
    pub fn print(&self, value: &Value, out: &mut dyn Write) -> Result<(), GngplotError> {
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut *out, formatter);
        value.serialize(&mut serializer).map_err(io::Error::from)?;

        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new(&PrintConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::source::GraphFrameSource;

    fn print(printer: &PrettyPrinter, text: &str) -> String {
        let value = GraphFrameSource::from_reader(Cursor::new(text.to_string()))
            .read_value()
            .unwrap();
        let mut out = Vec::new();
        printer.print(&value, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_indent_is_one_space() {
        let out = print(&PrettyPrinter::default(), r#"{"nodes": {"a": [0, 1]}, "edges": []}"#);
        assert_eq!(
            out,
            "{\n \"nodes\": {\n  \"a\": [\n   0,\n   1\n  ]\n },\n \"edges\": []\n}\n"
        );
    }

    #[test]
    fn test_output_parses_back_to_input() {
        let input = r#"{"z": 1, "a": {"nested": [true, null, 2.5]}, "m": "text"}"#;
        let out = print(&PrettyPrinter::default(), input);

        let reparsed: Value = serde_json::from_str(&out).unwrap();
        let original: Value = serde_json::from_str(input).unwrap();
        assert_eq!(reparsed, original);

        // Key order survives
        let keys: Vec<&String> = reparsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_configured_indent() {
        let mut config = PrintConfig::default();
        config.set_indent(4);
        let out = print(&PrettyPrinter::new(&config), r#"{"k": 1}"#);
        assert_eq!(out, "{\n    \"k\": 1\n}\n");
    }

    #[test]
    fn test_scalar_document() {
        assert_eq!(print(&PrettyPrinter::default(), "42"), "42\n");
    }
}
