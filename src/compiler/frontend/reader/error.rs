use super::Input;
use crate::compiler::frontend::error::{Detail, Error};
use nom::error::{VerboseError, VerboseErrorKind};
use nom::Err;

type NomError<'a> = VerboseError<Input<'a>>;

impl<'a> From<&(Input<'a>, VerboseErrorKind)> for Detail {
    fn from(e: &(Input<'a>, VerboseErrorKind)) -> Detail {
        let (input, kind) = e;
        let content = match kind {
            VerboseErrorKind::Context(ctx) => ctx.to_string(),
            VerboseErrorKind::Char(c) => format!("expected `{}`", c),
            VerboseErrorKind::Nom(k) => format!("while parsing {:?}", k),
        };
        let start = input.location_offset();
        let width = input.fragment().chars().next().map_or(0, char::len_utf8);
        Detail::new(content, input.extra.location(start..start + width))
    }
}

impl<'a> From<Err<NomError<'a>>> for Error {
    fn from(e: Err<NomError<'a>>) -> Error {
        match e {
            Err::Incomplete(_) => Error::bug("streaming parser used on complete input"),
            Err::Failure(e) | Err::Error(e) => from_verbose_error(e),
        }
    }
}

fn from_verbose_error(e: NomError) -> Error {
    let message = e
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some(ctx.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| "unexpected input".to_string());

    let mut details = e.errors.iter().map(Detail::from);
    let primary = match details.next() {
        Some(detail) => detail,
        None => return Error::bug("parser failed without reporting an error"),
    };
    let at_end = e
        .errors
        .first()
        .map_or(false, |(input, _)| input.fragment().is_empty());

    if at_end {
        Error::incomplete_input(message, primary)
    } else {
        Error::parse_error(message, primary, details.collect::<Vec<_>>())
    }
}
