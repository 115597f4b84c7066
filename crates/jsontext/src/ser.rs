#![allow(clippy::float_cmp)]

use core::fmt::Write;

use crate::value::{Object, Value};

/// Output formatting for [`to_string_with`].
///
/// The default is the compact form; [`pretty`](WriteOptions::pretty) puts
/// every element and member on its own line, indented by
/// [`indent_size`](WriteOptions::indent_size) spaces per level.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pretty: bool,
    indent_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_size: 2,
        }
    }
}

impl WriteOptions {
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }
}

/// Renders the value as compact JSON text.
///
/// Serialization is total: every alternative has a defined rendering and
/// the result is always valid UTF-8. Object members appear in ascending
/// key order.
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with(value, &WriteOptions::default())
}

/// Renders the value pretty-printed with two-space indentation.
#[must_use]
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with(value, &WriteOptions::default().pretty(true))
}

/// Renders the value under explicit [`WriteOptions`].
#[must_use]
pub fn to_string_with(value: &Value, options: &WriteOptions) -> String {
    let mut serializer = Serializer {
        pretty: options.pretty,
        indent_size: options.indent_size,
        depth: 0,
        out: String::new(),
    };
    serializer.write_value(value);
    serializer.out
}

struct Serializer {
    pretty: bool,
    indent_size: usize,
    depth: usize,
    out: String,
}

impl Serializer {
    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Integer(integer) => {
                self.out.push_str(itoa::Buffer::new().format(*integer));
            }
            Value::Number(number) => self.write_number(*number),
            Value::String(string) => write_escaped(&mut self.out, string),
            Value::Array(items) => self.write_array(items),
            Value::Object(members) => self.write_object(members),
        }
    }

    /// Mathematically integral numbers within `i64` range are emitted as
    /// bare integer literals, everything else in shortest round-trip form.
    /// NaN and the infinities have no JSON rendering and fall back to
    /// `null`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn write_number(&mut self, number: f64) {
        if !number.is_finite() {
            self.out.push_str("null");
        } else if number.trunc() == number
            && number >= i64::MIN as f64
            && number < i64::MAX as f64
        {
            self.out.push_str(itoa::Buffer::new().format(number as i64));
        } else {
            self.out.push_str(ryu::Buffer::new().format_finite(number));
        }
    }

    fn write_array(&mut self, items: &[Value]) {
        self.out.push('[');
        if !items.is_empty() {
            self.newline();
            self.depth += 1;
            let mut first = true;
            for item in items {
                if !first {
                    self.out.push(',');
                    self.newline();
                }
                first = false;
                self.indent();
                self.write_value(item);
            }
            self.depth -= 1;
            self.newline();
            self.indent();
        }
        self.out.push(']');
    }

    fn write_object(&mut self, members: &Object) {
        self.out.push('{');
        if !members.is_empty() {
            self.newline();
            self.depth += 1;
            let mut first = true;
            for (key, value) in members {
                if !first {
                    self.out.push(',');
                    self.newline();
                }
                first = false;
                self.indent();
                write_escaped(&mut self.out, key);
                self.out.push(':');
                if self.pretty {
                    self.out.push(' ');
                }
                self.write_value(value);
            }
            self.depth -= 1;
            self.newline();
            self.indent();
        }
        self.out.push('}');
    }

    fn newline(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }

    fn indent(&mut self) {
        if self.pretty {
            let width = self.depth * self.indent_size;
            self.out.extend(core::iter::repeat(' ').take(width));
        }
    }
}

/// Quotes and escapes string content. `"`, `\` and the named control
/// characters get their short escapes, the remaining control characters
/// `\u00XX`; everything else, including multi-byte UTF-8, passes through
/// untouched.
fn write_escaped(out: &mut String, content: &str) {
    out.push('"');
    for ch in content.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            control if u32::from(control) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", u32::from(control));
            }
            other => out.push(other),
        }
    }
    out.push('"');
}
