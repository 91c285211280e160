use super::parser::{Placeholder, Token};
use crate::args::{Arg, Args};
use crate::error::{TemplateError, TemplateResult};
use crate::fragment::{Composed, Fragment};

/// Resolve every token against `args`, in order.
///
/// Positional placeholders consume `args.positional()` left to right, one
/// each whatever their format. A missing argument aborts immediately.
/// Arguments of the wrong kind are checked once every argument has been
/// resolved, so a template/argument mismatch is always reported as a missing
/// argument first.
pub fn bind<'t>(
    tokens: impl IntoIterator<Item = Token<'t>>,
    args: &Args,
) -> TemplateResult<Composed> {
    let tokens = tokens.into_iter();
    let mut out = Composed::with_capacity(tokens.size_hint().0);
    let mut cursor = 0;
    let mut rejected: Option<TemplateError> = None;

    for token in tokens {
        let ph = match token {
            Token::Literal(text) => {
                out.push(Fragment::sql(text));
                continue;
            }
            Token::Placeholder(ph) => ph,
        };

        let formatted = if ph.is_positional() {
            let index = cursor;
            cursor += 1;
            let arg = args.positional().get(index).ok_or(
                TemplateError::MissingPositionalArgument {
                    index,
                    supplied: args.positional().len(),
                },
            )?;
            apply(ph, arg, || format!("#{index}"))
        } else {
            let arg = args
                .get(ph.name)
                .ok_or_else(|| TemplateError::missing_named(ph.name))?;
            apply(ph, arg, || ph.name.to_string())
        };

        match formatted {
            Ok(fragment) => {
                out.push(fragment);
            }
            Err(err) => {
                rejected.get_or_insert(err);
            }
        }
    }

    match rejected {
        Some(err) => Err(err),
        None => Ok(out),
    }
}

fn apply(
    ph: Placeholder<'_>,
    arg: &Arg,
    label: impl FnOnce() -> String,
) -> TemplateResult<Fragment> {
    ph.format
        .apply(arg)
        .map_err(|rejection| rejection.into_error(label(), ph.format))
}
