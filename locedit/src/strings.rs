//! The Apple `.strings` grammar: parsing and serialization.
//!
//! One pair per line, `"key" = "value";`. Blank lines and single-line
//! comments are skipped; anything else is a parse error. Output is always
//! sorted by key.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::{error::Error, traits::Parser, types::LocalizationString};

/// In-memory form of one `.strings` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    /// Key-sorted pairs of the file.
    pub strings: Vec<LocalizationString>,
}

impl Format {
    pub fn new(strings: Vec<LocalizationString>) -> Self {
        Format { strings }
    }
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let mut pairs = BTreeMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(Error::Io)?;
            if let Some((key, value)) = parse_line(&line, index + 1)? {
                // Duplicate keys collapse, last occurrence wins.
                pairs.insert(key, value);
            }
        }

        Ok(Format {
            strings: pairs
                .into_iter()
                .map(|(key, value)| LocalizationString { key, value })
                .collect(),
        })
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = String::new();

        for string in &self.strings {
            content.push_str(&format!(
                "\"{}\" = \"{}\";\n",
                escape(&string.key),
                escape(&string.value)
            ));
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }

    /// Override default file reading to support BOM-aware decoding; Apple
    /// tooling frequently writes UTF-16 `.strings` files.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

/// Escapes literal double quotes for embedding in a quoted string.
///
/// No other character class is escaped; a value ending in a backslash is
/// not representable in this grammar and fails to re-parse.
fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Parses one line into a key/value pair. Blank lines, `//` lines and
/// single-line `/* ... */` comments yield `None`.
fn parse_line(line: &str, number: usize) -> Result<Option<(String, String)>, Error> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.starts_with("//")
        || (trimmed.starts_with("/*") && trimmed.ends_with("*/"))
    {
        return Ok(None);
    }

    let mut chars = trimmed.chars().peekable();

    let key = read_quoted(&mut chars, number)?;
    skip_spaces(&mut chars);
    if chars.next() != Some('=') {
        return Err(Error::parse_error(number, "expected `=` after key"));
    }
    skip_spaces(&mut chars);
    let value = read_quoted(&mut chars, number)?;
    skip_spaces(&mut chars);
    if chars.next() != Some(';') {
        return Err(Error::parse_error(number, "expected `;` after value"));
    }
    skip_spaces(&mut chars);
    if chars.next().is_some() {
        return Err(Error::parse_error(number, "unexpected content after `;`"));
    }

    Ok(Some((key, value)))
}

/// Reads a `"..."` token, decoding `\"` to a literal quote. Any other
/// backslash passes through untouched, mirroring the serializer.
fn read_quoted(chars: &mut Peekable<Chars<'_>>, number: usize) -> Result<String, Error> {
    if chars.next() != Some('"') {
        return Err(Error::parse_error(number, "expected opening quote"));
    }

    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                out.push('"');
            }
            '"' => return Ok(out),
            other => out.push(other),
        }
    }

    Err(Error::parse_error(number, "unterminated quoted string"))
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Parser;

    #[test]
    fn test_parse_basic_pairs_sorted_by_key() {
        let content = r#"
        "zebra" = "Zebra";
        "apple" = "Apple";
        "#;
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.strings.len(), 2);
        assert_eq!(parsed.strings[0].key, "apple");
        assert_eq!(parsed.strings[1].key, "zebra");
    }

    #[test]
    fn test_blank_lines_and_comments_are_skipped() {
        let content = r#"

        // Line comment
        /* Block comment */
        "good" = "yes";

        "#;
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.strings.len(), 1);
        assert_eq!(parsed.strings[0].key, "good");
        assert_eq!(parsed.strings[0].value, "yes");
    }

    #[test]
    fn test_malformed_line_is_a_parse_error() {
        let content = "\"good\" = \"yes\";\nbad line without equals\n";
        let error = Format::from_str(content).unwrap_err();
        match error {
            Error::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_is_a_parse_error() {
        let error = Format::from_str("\"key\" = \"value\"\n").unwrap_err();
        assert!(matches!(error, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_keys_collapse_last_wins() {
        let content = "\"key\" = \"first\";\n\"key\" = \"second\";\n";
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.strings.len(), 1);
        assert_eq!(parsed.strings[0].value, "second");
    }

    #[test]
    fn test_escaped_quote_in_value() {
        let content = r#""greeting" = "Say \"hi\"";"#;
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.strings[0].value, "Say \"hi\"");
    }

    #[test]
    fn test_other_backslashes_pass_through() {
        let content = r#""newline" = "line1\nline2";"#;
        let parsed = Format::from_str(content).unwrap();
        assert_eq!(parsed.strings[0].value, r"line1\nline2");
    }

    #[test]
    fn test_empty_value() {
        let parsed = Format::from_str("\"empty\" = \"\";\n").unwrap();
        assert_eq!(parsed.strings[0].key, "empty");
        assert_eq!(parsed.strings[0].value, "");
    }

    #[test]
    fn test_serialization_escapes_quotes_and_sorts() {
        let format = Format::new(vec![
            LocalizationString::new("greeting", "Say \"hi\""),
            LocalizationString::new("bye", "Goodbye"),
        ]);
        // Serialization renders in sequence order; callers sort beforehand.
        let mut sorted = format.strings.clone();
        sorted.sort();
        let mut output = Vec::new();
        Format::new(sorted).to_writer(&mut output).unwrap();
        let rendered = String::from_utf8(output).unwrap();
        assert_eq!(
            rendered,
            "\"bye\" = \"Goodbye\";\n\"greeting\" = \"Say \\\"hi\\\"\";\n"
        );
    }

    #[test]
    fn test_round_trip_preserves_pairs_modulo_ordering() {
        let content = "\"b\" = \"2\";\n\"a\" = \"1\";\n\"quoted\" = \"He said \\\"no\\\"\";\n";
        let parsed = Format::from_str(content).unwrap();
        let mut output = Vec::new();
        parsed.to_writer(&mut output).unwrap();
        let reparsed = Format::from_str(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(parsed.strings, reparsed.strings);
        assert_eq!(reparsed.strings[2].value, "He said \"no\"");
    }

    #[test]
    fn test_no_leading_blank_line_in_output() {
        let format = Format::new(vec![LocalizationString::new("a", "1")]);
        let mut output = Vec::new();
        format.to_writer(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\"a\" = \"1\";\n");
    }
}
