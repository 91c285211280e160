use super::Fragment;
use crate::value::Value;
use std::fmt;

/// A bind parameter slot in a rendered query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A named placeholder; all occurrences share one `$n`.
    Named(String),
    /// The n-th anonymous placeholder (0-based), in render order.
    Positional(usize),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Named(name) => write!(f, "named parameter '{name}'"),
            Slot::Positional(i) => write!(f, "positional parameter #{i}"),
        }
    }
}

/// Renders fragments to PostgreSQL text, numbering bind placeholders.
pub(crate) struct SqlWriter {
    out: String,
    slots: Vec<Slot>,
    anonymous: usize,
}

impl SqlWriter {
    pub(crate) fn new() -> Self {
        Self {
            out: String::new(),
            slots: Vec::new(),
            anonymous: 0,
        }
    }

    pub(crate) fn finish(self) -> (String, Vec<Slot>) {
        (self.out, self.slots)
    }

    pub(crate) fn write_fragment(&mut self, fragment: &Fragment) {
        match fragment {
            Fragment::Sql(s) => self.out.push_str(s),
            Fragment::Identifier(name) => write_identifier(&mut self.out, name),
            Fragment::Literal(value) => write_literal(&mut self.out, value),
            Fragment::Placeholder(name) => {
                let idx = self.slot_index(name.as_deref());
                self.out.push('$');
                self.out.push_str(&idx.to_string());
            }
            Fragment::Composed(c) => {
                for part in c.iter() {
                    self.write_fragment(part);
                }
            }
        }
    }

    /// 1-based `$n` for a placeholder, allocating a new slot if needed.
    fn slot_index(&mut self, name: Option<&str>) -> usize {
        match name {
            Some(name) => {
                let existing = self
                    .slots
                    .iter()
                    .position(|s| matches!(s, Slot::Named(n) if n == name));
                match existing {
                    Some(pos) => pos + 1,
                    None => {
                        self.slots.push(Slot::Named(name.to_string()));
                        self.slots.len()
                    }
                }
            }
            None => {
                self.slots.push(Slot::Positional(self.anonymous));
                self.anonymous += 1;
                self.slots.len()
            }
        }
    }
}

fn write_identifier(out: &mut String, name: &str) {
    out.reserve(name.len() + 2);
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => {
            // Keep `1 -{@L}` from turning into a `--` comment.
            if *n < 0 {
                out.push(' ');
            }
            out.push_str(&n.to_string());
        }
        Value::Float(f) => {
            if f.is_nan() {
                out.push_str("'NaN'::float8");
            } else if f.is_infinite() {
                out.push_str(if *f > 0.0 {
                    "'Infinity'::float8"
                } else {
                    "'-Infinity'::float8"
                });
            } else {
                if f.is_sign_negative() {
                    out.push(' ');
                }
                // Debug keeps the decimal point (`1.0`, not `1`).
                out.push_str(&format!("{f:?}"));
            }
        }
        Value::Text(s) => write_string(out, s),
        Value::Json(j) => write_string(out, &j.to_string()),
    }
}

/// Single-quoted string constant; switches to `E'...'` when backslashes are present.
fn write_string(out: &mut String, s: &str) {
    let escaped = s.contains('\\');
    out.reserve(s.len() + 3);
    if escaped {
        out.push('E');
    }
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('\'');
}
