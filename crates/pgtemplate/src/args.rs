//! Argument sets for [`Template::format`](crate::Template::format).
//!
//! Positional arguments are consumed in order by `{}` / `{@X}` placeholders;
//! named arguments are looked up by exact name. The two pools never mix.
//!
//! # Example
//!
//! ```
//! use pgtemplate::{Args, Fragment};
//!
//! let args = Args::new()
//!     .arg("users")
//!     .named("status", "active")
//!     .named("limit", Fragment::sql("LIMIT 10"));
//! assert_eq!(args.positional().len(), 1);
//! assert!(args.get("status").is_some());
//! ```

use crate::fragment::Fragment;
use crate::value::Value;
use std::collections::HashMap;

/// One argument: a ready-made fragment, or a plain value to be formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Fragment(Fragment),
    Value(Value),
}

impl Arg {
    /// Short name of the argument kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Fragment(f) => f.kind(),
            Arg::Value(v) => v.kind(),
        }
    }
}

impl From<Fragment> for Arg {
    fn from(f: Fragment) -> Self {
        Arg::Fragment(f)
    }
}

impl From<crate::Composed> for Arg {
    fn from(c: crate::Composed) -> Self {
        Arg::Fragment(Fragment::Composed(c))
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

/// Implements `From<$t> for Arg` via [`Value`].
macro_rules! arg_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::Value(Value::from(v))
                }
            }
        )*
    };
}

arg_from_value!(&str, String, bool, i32, i64, f64, serde_json::Value);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Arg::Value(Value::from(v))
    }
}

/// Positional and named arguments for one `format` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Arg>,
    named: HashMap<String, Arg>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument (consuming version).
    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.push(value);
        self
    }

    /// Add a named argument (consuming version). Replaces an earlier value for `name`.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.insert(name, value);
        self
    }

    /// Append a positional argument.
    pub fn push(&mut self, value: impl Into<Arg>) -> &mut Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Arg>) -> Option<Arg> {
        self.named.insert(name.into(), value.into())
    }

    pub fn positional(&self) -> &[Arg] {
        &self.positional
    }

    /// Look up a named argument.
    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.named.get(name)
    }

    pub fn named_len(&self) -> usize {
        self.named.len()
    }
}

/// Build an [`Args`] from positional values followed by `"name" => value` pairs.
///
/// ```
/// use pgtemplate::{args, Fragment};
///
/// let a = args!["users", 42; "kyt@" => "apple.orange", "foo" => Fragment::sql("x")];
/// assert_eq!(a.positional().len(), 2);
/// assert_eq!(a.named_len(), 2);
///
/// let only_named = args![; "foo" => 1];
/// assert!(only_named.positional().is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($pos:expr),* $(,)? $(; $($name:expr => $val:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut args = $crate::Args::new();
        $( args.push($pos); )*
        $( $( args.insert($name, $val); )* )?
        args
    }};
}
