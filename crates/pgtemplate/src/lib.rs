//! # pgtemplate
//!
//! Compile human-written query templates into safely composed PostgreSQL.
//!
//! A template is SQL text with `{...}` placeholders. Each placeholder names an
//! argument (or takes the next positional one) and may carry a format code
//! that decides how the argument is quoted:
//!
//! - `S`: trusted raw SQL
//! - `I`: a quoted identifier
//! - `L`: an escaped literal
//! - `P`: a `$n` bind placeholder
//! - `Q`: a dotted, qualified identifier
//! - no code: the argument is already a [`Fragment`]
//!
//! ```
//! use pgtemplate::{args, Fragment, Params, Template};
//!
//! let t = Template::new("SELECT {cols} FROM {@Q} WHERE {key@I} = {key@P}");
//! let cols = ["id", "name"]
//!     .into_iter()
//!     .map(Fragment::identifier)
//!     .collect::<pgtemplate::Composed>()
//!     .join(Fragment::sql(", "));
//!
//! let q = t.format(&args!["public.users"; "cols" => cols, "key" => "email"])?;
//! assert_eq!(
//!     q.to_sql(),
//!     r#"SELECT "id", "name" FROM "public"."users" WHERE "email" = $1"#
//! );
//!
//! let prepared = q.prepare(&Params::new().bind_named("email", "a@example.com"))?;
//! assert_eq!(prepared.params.len(), 1);
//! # Ok::<(), pgtemplate::TemplateError>(())
//! ```
//!
//! The marker separating a name from its code defaults to `@` and can be
//! changed per template ([`Template::with_marker`], [`TemplateConfig`]).

pub mod args;
pub mod config;
pub mod error;
pub mod fragment;
pub mod param;
pub mod prelude;
pub mod template;
pub mod value;

pub use args::{Arg, Args};
pub use config::{DEFAULT_MARKER, TemplateConfig};
pub use error::{TemplateError, TemplateResult};
pub use fragment::{Composed, Fragment, Slot};
pub use param::{Param, Params, Prepared};
pub use template::{Format, Template};
pub use value::Value;
