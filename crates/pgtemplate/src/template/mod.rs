//! Query templates.
//!
//! A template is SQL text with `{...}` placeholders. The placeholder content
//! is a name followed by an optional `marker + code` suffix:
//!
//! | placeholder | argument | becomes |
//! |---|---|---|
//! | `{}` / `{name}` | next positional / named | the argument, which must be a [`Fragment`] |
//! | `{@S}` / `{name@S}` | text | raw SQL |
//! | `{@I}` / `{name@I}` | text | one quoted identifier |
//! | `{@L}` / `{name@L}` | any [`Value`] | escaped literal |
//! | `{@P}` / `{name@P}` | text or null | bind placeholder (`$n`) |
//! | `{@Q}` / `{name@Q}` | text | dotted name as quoted identifiers |
//!
//! Only the exact trailing pair `marker + code` is a suffix, so `{kyt@@S}`
//! is the name `kyt@` with format `S`, and `{nol@@}` is the name `nol@@`
//! with no format.
//!
//! # Example
//!
//! ```
//! use pgtemplate::{args, Template};
//!
//! let t = Template::new("SELECT {col@I} FROM {@Q} WHERE {col@I} = {val@L}");
//! let q = t.format(&args!["public.users"; "col" => "name", "val" => "O'Reilly"])?;
//!
//! assert_eq!(
//!     q.to_sql(),
//!     r#"SELECT "name" FROM "public"."users" WHERE "name" = 'O''Reilly'"#
//! );
//! # Ok::<(), pgtemplate::TemplateError>(())
//! ```
//!
//! [`Fragment`]: crate::Fragment
//! [`Value`]: crate::Value

mod binder;
mod format;
mod parser;

#[cfg(test)]
mod tests;

pub use binder::bind;
pub use format::Format;
pub use parser::{Placeholder, Token, Tokens, parse};

use crate::args::Args;
use crate::config::{DEFAULT_MARKER, TemplateConfig};
use crate::error::TemplateResult;
use crate::fragment::Composed;
use std::str::FromStr;

/// Parsed token with owned text, stored inside a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, format: Format },
}

impl Segment {
    fn as_token(&self) -> Token<'_> {
        match self {
            Segment::Literal(text) => Token::Literal(text.as_str()),
            Segment::Placeholder { name, format } => Token::Placeholder(Placeholder {
                name: name.as_str(),
                format: *format,
            }),
        }
    }
}

impl From<Token<'_>> for Segment {
    fn from(token: Token<'_>) -> Self {
        match token {
            Token::Literal(text) => Segment::Literal(text.to_string()),
            Token::Placeholder(ph) => Segment::Placeholder {
                name: ph.name.to_string(),
                format: ph.format,
            },
        }
    }
}

/// A reusable, immutable query template.
///
/// Parsed once at construction; [`format`](Template::format) only binds, so
/// one template can be formatted many times, from many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    marker: char,
    segments: Box<[Segment]>,
}

impl Template {
    /// Parse `source` with the default `@` marker.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_marker(source, DEFAULT_MARKER)
    }

    /// Parse `source` with a custom marker character.
    pub fn with_marker(source: impl Into<String>, marker: char) -> Self {
        let source = source.into();
        let segments: Box<[Segment]> = parse(&source, marker).map(Segment::from).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "pgtemplate.parse",
            marker = %marker,
            tokens = segments.len(),
            placeholders = segments
                .iter()
                .filter(|s| matches!(s, Segment::Placeholder { .. }))
                .count(),
            "parsed template"
        );

        Self {
            source,
            marker,
            segments,
        }
    }

    /// Parse `source` using a validated [`TemplateConfig`].
    pub fn with_config(
        source: impl Into<String>,
        config: &TemplateConfig,
    ) -> TemplateResult<Self> {
        config.validate()?;
        Ok(Self::with_marker(source, config.marker))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// The parsed tokens, in template order.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        self.segments.iter().map(Segment::as_token)
    }

    /// Number of positional (unnamed) placeholders, i.e. how many positional
    /// arguments [`format`](Template::format) will consume.
    pub fn positional_count(&self) -> usize {
        self.placeholders().filter(Placeholder::is_positional).count()
    }

    /// Distinct named placeholder names, in first-appearance order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for ph in self.placeholders() {
            if !ph.is_positional() && !names.contains(&ph.name) {
                names.push(ph.name);
            }
        }
        names
    }

    fn placeholders(&self) -> impl Iterator<Item = Placeholder<'_>> + '_ {
        self.tokens().filter_map(|t| match t {
            Token::Placeholder(ph) => Some(ph),
            Token::Literal(_) => None,
        })
    }

    /// Bind `args` into an ordered fragment sequence.
    ///
    /// Fails with `MissingPositionalArgument` / `MissingNamedArgument` when an
    /// argument is absent, and with `NotAFragment` / `TypeMismatch` when an
    /// argument does not suit its placeholder's format.
    pub fn format(&self, args: &Args) -> TemplateResult<Composed> {
        let result = bind(self.tokens(), args);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(composed) => tracing::debug!(
                target: "pgtemplate.format",
                fragments = composed.len(),
                positional = args.positional().len(),
                named = args.named_len(),
                "formatted template"
            ),
            Err(err) => tracing::debug!(
                target: "pgtemplate.format",
                error = %err,
                "template formatting failed"
            ),
        }

        result
    }
}

impl FromStr for Template {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::new(s))
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Template::new(s)
    }
}
