use super::format::Format;

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Verbatim text outside any placeholder.
    Literal(&'a str),
    /// A `{...}` placeholder.
    Placeholder(Placeholder<'a>),
}

/// A placeholder split into its name and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Argument name; empty for a positional placeholder.
    pub name: &'a str,
    pub format: Format,
}

impl<'a> Placeholder<'a> {
    /// Split placeholder content into name and format.
    ///
    /// Only an exact trailing `marker + code` is a format suffix; anything
    /// else, including other uses of the marker, stays part of the name.
    pub fn from_content(content: &'a str, marker: char) -> Self {
        let mut tail = content.chars().rev();
        if let (Some(code), Some(m)) = (tail.next(), tail.next())
            && m == marker
            && let Some(format) = Format::from_code(code)
        {
            let cut = content.len() - code.len_utf8() - m.len_utf8();
            return Self {
                name: &content[..cut],
                format,
            };
        }
        Self {
            name: content,
            format: Format::Passthrough,
        }
    }

    pub fn is_positional(&self) -> bool {
        self.name.is_empty()
    }
}

/// Lazy token iterator over a template string. See [`parse`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    marker: char,
}

/// Scan `template` into literal runs and placeholders.
///
/// - The first `}` after a `{` closes the placeholder; there is no nesting
///   and no brace escaping.
/// - A `{` with no closing `}` starts a literal run to the end.
/// - Empty literal runs are skipped.
///
/// Parsing cannot fail.
///
/// ```
/// use pgtemplate::template::{parse, Format, Placeholder, Token};
///
/// let tokens: Vec<_> = parse("SELECT {@I} FROM {t@Q}", '@').collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Literal("SELECT "),
///         Token::Placeholder(Placeholder { name: "", format: Format::Identifier }),
///         Token::Literal(" FROM "),
///         Token::Placeholder(Placeholder { name: "t", format: Format::Qualified }),
///     ]
/// );
/// ```
pub fn parse(template: &str, marker: char) -> Tokens<'_> {
    Tokens {
        rest: template,
        marker,
    }
}

impl<'a> Tokens<'a> {
    fn take_literal(&mut self, len: usize) -> Token<'a> {
        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        Token::Literal(text)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(open) = self.rest.find('{') else {
            return Some(self.take_literal(self.rest.len()));
        };
        let Some(close) = self.rest[open + 1..].find('}') else {
            return Some(self.take_literal(self.rest.len()));
        };

        if open > 0 {
            return Some(self.take_literal(open));
        }

        let content = &self.rest[1..=close];
        self.rest = &self.rest[close + 2..];
        Some(Token::Placeholder(Placeholder::from_content(
            content,
            self.marker,
        )))
    }
}
