use crate::args::Arg;
use crate::error::TemplateError;
use crate::fragment::{Composed, Fragment};
use crate::value::Value;
use std::fmt;

/// How a placeholder's argument becomes a [`Fragment`].
///
/// Selected by the one-letter code after the marker (`{name@I}`); no code
/// means [`Format::Passthrough`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// No code: the argument must already be a fragment.
    Passthrough,
    /// `S`: raw SQL text.
    Sql,
    /// `I`: one quoted identifier.
    Identifier,
    /// `L`: escaped literal.
    Literal,
    /// `P`: bind placeholder named by the argument.
    Placeholder,
    /// `Q`: dotted name split into quoted identifiers.
    Qualified,
}

impl Format {
    /// All recognized codes.
    pub const CODES: [char; 5] = ['S', 'I', 'L', 'P', 'Q'];

    /// Map a code letter to its format. Case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Format::Sql),
            'I' => Some(Format::Identifier),
            'L' => Some(Format::Literal),
            'P' => Some(Format::Placeholder),
            'Q' => Some(Format::Qualified),
            _ => None,
        }
    }

    pub fn code(self) -> Option<char> {
        match self {
            Format::Passthrough => None,
            Format::Sql => Some('S'),
            Format::Identifier => Some('I'),
            Format::Literal => Some('L'),
            Format::Placeholder => Some('P'),
            Format::Qualified => Some('Q'),
        }
    }

    /// Format one resolved argument.
    pub(crate) fn apply(self, arg: &Arg) -> Result<Fragment, Rejection> {
        match self {
            Format::Passthrough => match arg {
                Arg::Fragment(f) => Ok(f.clone()),
                Arg::Value(_) => Err(Rejection::NotAFragment),
            },
            Format::Sql => text(arg).map(Fragment::sql),
            Format::Identifier => text(arg).map(Fragment::identifier),
            Format::Literal => match arg {
                Arg::Value(v) => Ok(Fragment::Literal(v.clone())),
                Arg::Fragment(f) => Err(Rejection::wrong_kind("a plain value", f.kind())),
            },
            Format::Placeholder => match arg {
                Arg::Value(Value::Text(name)) if !name.is_empty() => {
                    Ok(Fragment::placeholder(name.as_str()))
                }
                Arg::Value(Value::Text(_) | Value::Null) => Ok(Fragment::anonymous_placeholder()),
                other => Err(Rejection::wrong_kind("text or null", other.kind())),
            },
            Format::Qualified => text(arg).map(|s| Fragment::Composed(Composed::qualified(s))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(c) => write!(f, "{c}"),
            None => f.write_str("passthrough"),
        }
    }
}

fn text(arg: &Arg) -> Result<&str, Rejection> {
    match arg {
        Arg::Value(Value::Text(s)) => Ok(s.as_str()),
        other => Err(Rejection::wrong_kind("text", other.kind())),
    }
}

/// Why a formatter refused an argument; the binder adds the placeholder label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    NotAFragment,
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl Rejection {
    fn wrong_kind(expected: &'static str, found: &'static str) -> Self {
        Rejection::WrongKind { expected, found }
    }

    pub(crate) fn into_error(self, placeholder: String, format: Format) -> TemplateError {
        match self {
            Rejection::NotAFragment => TemplateError::NotAFragment { placeholder },
            Rejection::WrongKind { expected, found } => TemplateError::TypeMismatch {
                placeholder,
                format: format.code().unwrap_or('?'),
                expected,
                found,
            },
        }
    }
}
