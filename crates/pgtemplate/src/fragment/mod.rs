//! Safely composable SQL fragments.
//!
//! A [`Fragment`] is one piece of a query whose quoting is decided by its
//! variant rather than by the text inside it:
//!
//! - [`Fragment::Sql`]: trusted raw SQL, emitted verbatim
//! - [`Fragment::Identifier`]: a single identifier, always double-quoted
//! - [`Fragment::Literal`]: a constant, quoted and escaped for its type
//! - [`Fragment::Placeholder`]: a bind parameter slot, rendered as `$n`
//! - [`Fragment::Composed`]: a nested sequence of fragments
//!
//! [`Composed`] is an ordered sequence of fragments and is what
//! [`Template::format`](crate::Template::format) returns.
//!
//! # Example
//!
//! ```
//! use pgtemplate::{Composed, Fragment};
//!
//! let q: Composed = [
//!     Fragment::sql("SELECT * FROM "),
//!     Fragment::identifier("user table"),
//!     Fragment::sql(" WHERE id = "),
//!     Fragment::placeholder("id"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(q.to_sql(), r#"SELECT * FROM "user table" WHERE id = $1"#);
//! ```

mod render;


pub use render::Slot;

use crate::value::Value;
use render::SqlWriter;
use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// One safely composable piece of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Fragment {
    /// Raw SQL text, emitted verbatim.
    Sql(String),
    /// One identifier; never split on `.`.
    Identifier(String),
    /// A constant rendered as an escaped literal.
    Literal(Value),
    /// A bind parameter slot; `None` is anonymous.
    Placeholder(Option<String>),
    /// A nested sequence.
    Composed(Composed),
}

impl Fragment {
    pub fn sql(text: impl Into<String>) -> Self {
        Fragment::Sql(text.into())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Fragment::Identifier(name.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Fragment::Literal(value.into())
    }

    /// A named bind placeholder. Every occurrence of the same name shares one `$n`.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Fragment::Placeholder(Some(name.into()))
    }

    /// An anonymous bind placeholder. Each occurrence takes a fresh `$n`.
    pub fn anonymous_placeholder() -> Self {
        Fragment::Placeholder(None)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Sql(_) => "sql",
            Fragment::Identifier(_) => "identifier",
            Fragment::Literal(_) => "literal",
            Fragment::Placeholder(_) => "placeholder",
            Fragment::Composed(_) => "composed",
        }
    }

    /// Render this fragment on its own as PostgreSQL text.
    pub fn to_sql(&self) -> String {
        let mut w = SqlWriter::new();
        w.write_fragment(self);
        w.finish().0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<Composed> for Fragment {
    fn from(c: Composed) -> Self {
        Fragment::Composed(c)
    }
}

impl Add for Fragment {
    type Output = Composed;

    fn add(self, rhs: Fragment) -> Composed {
        Composed::from(vec![self, rhs])
    }
}

/// An ordered sequence of fragments.
///
/// Equality is structural: a nested sequence is not equal to its flattened
/// contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Composed {
    parts: Vec<Fragment>,
}

impl Composed {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            parts: Vec::with_capacity(cap),
        }
    }

    /// Append one fragment.
    pub fn push(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.parts.push(fragment.into());
        self
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[Fragment] {
        &self.parts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.parts.iter()
    }

    pub fn into_parts(self) -> Vec<Fragment> {
        self.parts
    }

    /// Split a dotted name into quoted identifiers joined by raw `.`.
    ///
    /// Every `.` splits; empty segments become empty identifiers.
    ///
    /// ```
    /// use pgtemplate::Composed;
    ///
    /// assert_eq!(Composed::qualified("public.users").to_sql(), r#""public"."users""#);
    /// assert_eq!(Composed::qualified("users").len(), 1);
    /// ```
    pub fn qualified(name: &str) -> Composed {
        name.split('.')
            .map(Fragment::identifier)
            .collect::<Composed>()
            .join(Fragment::sql("."))
    }

    /// Interleave `separator` between the parts of this sequence.
    ///
    /// ```
    /// use pgtemplate::{Composed, Fragment};
    ///
    /// let cols: Composed = ["id", "name"].into_iter().map(Fragment::identifier).collect();
    /// assert_eq!(cols.join(Fragment::sql(", ")).to_sql(), r#""id", "name""#);
    /// ```
    pub fn join(self, separator: Fragment) -> Composed {
        let mut out = Composed::with_capacity(self.parts.len().saturating_mul(2));
        for (i, part) in self.parts.into_iter().enumerate() {
            if i > 0 {
                out.parts.push(separator.clone());
            }
            out.parts.push(part);
        }
        out
    }

    /// Render as PostgreSQL text with `$1, $2, ...` bind placeholders.
    pub fn to_sql(&self) -> String {
        self.render().0
    }

    /// Distinct bind parameter slots, in `$n` order.
    pub fn placeholders(&self) -> Vec<Slot> {
        self.render().1
    }

    pub(crate) fn render(&self) -> (String, Vec<Slot>) {
        let mut w = SqlWriter::new();
        for part in &self.parts {
            w.write_fragment(part);
        }
        w.finish()
    }
}

impl fmt::Display for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<Vec<Fragment>> for Composed {
    fn from(parts: Vec<Fragment>) -> Self {
        Self { parts }
    }
}

impl FromIterator<Fragment> for Composed {
    fn from_iter<T: IntoIterator<Item = Fragment>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Composed {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Composed {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl Add<Fragment> for Composed {
    type Output = Composed;

    fn add(mut self, rhs: Fragment) -> Composed {
        self.parts.push(rhs);
        self
    }
}

impl Add for Composed {
    type Output = Composed;

    fn add(mut self, mut rhs: Composed) -> Composed {
        self.parts.append(&mut rhs.parts);
        self
    }
}
