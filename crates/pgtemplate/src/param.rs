//! Late binding of parameter values to rendered placeholders.
//!
//! `{name@P}` placeholders render as `$n`. [`Composed::prepare`] pairs each
//! `$n` slot with a value from [`Params`] so the result can be handed straight
//! to `tokio-postgres`.
//!
//! # Example
//!
//! ```
//! use pgtemplate::{Args, Params, Template};
//!
//! let q = Template::new("SELECT * FROM {@Q} WHERE id = {@P}")
//!     .format(&Args::new().arg("public.users").arg("id"))?;
//! let prepared = q.prepare(&Params::new().bind_named("id", 42_i64))?;
//!
//! assert_eq!(prepared.sql, r#"SELECT * FROM "public"."users" WHERE id = $1"#);
//! assert_eq!(prepared.params_ref().len(), 1);
//! # Ok::<(), pgtemplate::TemplateError>(())
//! ```

use crate::error::{TemplateError, TemplateResult};
use crate::fragment::{Composed, Slot};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly parameter value.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Borrow as the trait object `tokio-postgres` expects.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&self.0).finish()
    }
}

/// Parameter values for the bind placeholders of a composed query.
///
/// Anonymous placeholders take positional values in render order; named
/// placeholders take the value bound under their name.
#[derive(Clone, Debug, Default)]
pub struct Params {
    positional: Vec<Param>,
    named: HashMap<String, Param>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the next positional value.
    pub fn bind<T: ToSql + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.positional.push(Param::new(value));
        self
    }

    /// Bind a value under `name`, replacing any earlier one.
    pub fn bind_named<T: ToSql + Send + Sync + 'static>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Self {
        self.named.insert(name.into(), Param::new(value));
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    fn lookup(&self, slot: &Slot) -> Option<&Param> {
        match slot {
            Slot::Named(name) => self.named.get(name),
            Slot::Positional(i) => self.positional.get(*i),
        }
    }
}

/// Rendered SQL plus one parameter per `$n`, in order.
#[derive(Clone, Debug)]
pub struct Prepared {
    pub sql: String,
    pub params: Vec<Param>,
}

impl Prepared {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(Param::as_ref).collect()
    }
}

impl Composed {
    /// Render to SQL and collect a value for every bind placeholder slot.
    ///
    /// Values in `params` that no placeholder refers to are ignored.
    pub fn prepare(&self, params: &Params) -> TemplateResult<Prepared> {
        let (sql, slots) = self.render();
        let params = slots
            .iter()
            .map(|slot| {
                params
                    .lookup(slot)
                    .cloned()
                    .ok_or_else(|| TemplateError::MissingParameter(slot.to_string()))
            })
            .collect::<TemplateResult<Vec<_>>>()?;
        Ok(Prepared { sql, params })
    }
}
