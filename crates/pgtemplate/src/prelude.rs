//! Convenient imports for typical `pgtemplate` usage.
//!
//! ```ignore
//! use pgtemplate::prelude::*;
//! ```

pub use crate::args;
pub use crate::{
    Arg, Args, Composed, Fragment, Params, Prepared, Template, TemplateError, TemplateResult,
    Value,
};
