//! Output rendering.
//!
//! Bytes print as lowercase hex, text prints verbatim, and objects print one
//! `field: value` line per field in key order. `Null` prints nothing.

use std::io::{self, Write};

use naclgate_core::{Operation, Value, constants::PUBLISHED};

/// Write a gateway result.
pub fn value<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    match value {
        Value::Object(fields) => {
            for (name, field) in fields {
                write!(out, "{name}: ")?;
                scalar(out, field)?;
            }
            Ok(())
        },
        Value::Null => Ok(()),
        other => scalar(out, other),
    }
}

fn scalar<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    match value {
        Value::Text(text) => writeln!(out, "{text}"),
        Value::Bytes(bytes) => writeln!(out, "{}", hex::encode(bytes)),
        Value::Integer(n) => writeln!(out, "{n}"),
        Value::Float(x) => writeln!(out, "{x}"),
        Value::Bool(b) => writeln!(out, "{b}"),
        Value::Null => writeln!(out, "null"),
        Value::Object(_) => writeln!(out, "<object>"),
    }
}

/// Write every published constant as `name = value`.
pub fn constants<W: Write>(out: &mut W) -> io::Result<()> {
    for (name, size) in PUBLISHED {
        writeln!(out, "{name} = {size}")?;
    }
    Ok(())
}

/// Write every callable host name, one per line.
pub fn operations<W: Write>(out: &mut W) -> io::Result<()> {
    for name in Operation::host_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn rendered(v: &Value) -> String {
        let mut out = Vec::new();
        value(&mut out, v).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bytes_render_as_hex() {
        assert_eq!(rendered(&Value::Bytes(vec![0xde, 0xad])), "dead\n");
    }

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(rendered(&Value::from("Hello World!")), "Hello World!\n");
    }

    #[test]
    fn objects_render_one_line_per_field() {
        let fields = BTreeMap::from([
            ("secretKey".to_owned(), Value::Bytes(vec![2])),
            ("publicKey".to_owned(), Value::Bytes(vec![1])),
        ]);

        assert_eq!(rendered(&Value::Object(fields)), "publicKey: 01\nsecretKey: 02\n");
    }

    #[test]
    fn null_renders_nothing() {
        assert_eq!(rendered(&Value::Null), "");
    }

    #[test]
    fn constants_list_every_published_value() {
        let mut out = Vec::new();
        constants(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), PUBLISHED.len());
        assert!(text.contains("box_PUBLICKEYBYTES = 32\n"));
        assert!(text.contains("sign_SECRETKEYBYTES = 64\n"));
    }

    #[test]
    fn operations_list_both_variants() {
        let mut out = Vec::new();
        operations(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let names: Vec<&str> = text.lines().collect();

        assert_eq!(names.len(), 26);
        assert!(names.contains(&"sign_open"));
        assert!(names.contains(&"sign_open_utf8"));
        assert!(!names.contains(&"randombytes_utf8"));
    }
}
