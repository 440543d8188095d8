use std::collections::VecDeque;

use super::scanner::{Split, SplitKind};
use crate::compiler::error::Error;
use crate::compiler::frontend::error::Detail;
use crate::compiler::frontend::syntax::{Node, StringLiteral};
use crate::compiler::source::SourceId;
use crate::compiler::specifier::{meta_url, resolve_against_meta_url, stringify};

/// Value computed by the creator of a module block and spliced into its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The creator's `import.meta.url`
    MetaUrl,
    /// A local specifier resolved against the creator's `import.meta.url`
    ResolvedSpecifier(String),
}

impl Substitution {
    /// The expression computing the substitution, yielding a quoted JavaScript string.
    pub fn to_nodes(&self) -> Vec<Node> {
        match self {
            Substitution::MetaUrl => stringify(meta_url()),
            Substitution::ResolvedSpecifier(specifier) => stringify(resolve_against_meta_url(
                StringLiteral::quoted(specifier.as_str()),
            )),
        }
    }
}

impl From<SplitKind> for Substitution {
    fn from(kind: SplitKind) -> Self {
        match kind {
            SplitKind::MetaUrlRef => Substitution::MetaUrl,
            SplitKind::StaticImportSpecifier(specifier) => Substitution::ResolvedSpecifier(specifier),
        }
    }
}

/// A module block's text cut at its splits.
/// There is always exactly one more literal than there are substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicePlan {
    pub literals: Vec<String>,
    pub substitutions: Vec<Substitution>,
}

impl SplicePlan {
    /// Cuts `text` at `splits`, which must be sorted by descending start offset
    /// and must not overlap.
    pub fn build(text: &str, splits: &[Split], id: SourceId) -> Result<Self, Error> {
        let mut literals = VecDeque::with_capacity(splits.len() + 1);
        let mut substitutions = VecDeque::with_capacity(splits.len());
        let mut remainder = text;

        for split in splits {
            let (start, end) = (split.span.start, split.span.end);
            let detail = || Detail::new(format!("{:?}", split.kind), id.location(split.span.clone()));

            if start > end || end > remainder.len() {
                return Err(Error::internal_consistency(
                    format!(
                        "split {}..{} is out of bounds or out of order, {} bytes left",
                        start,
                        end,
                        remainder.len()
                    ),
                    detail(),
                ));
            }
            if !remainder.is_char_boundary(start) || !remainder.is_char_boundary(end) {
                return Err(Error::internal_consistency(
                    format!("split {}..{} is not on a character boundary", start, end),
                    detail(),
                ));
            }

            literals.push_front(remainder[end..].to_string());
            substitutions.push_front(Substitution::from(split.kind.clone()));
            remainder = &remainder[..start];
        }
        literals.push_front(remainder.to_string());

        log::trace!(
            "split {} bytes into {} literals",
            text.len(),
            literals.len()
        );

        Ok(Self {
            literals: literals.into(),
            substitutions: substitutions.into(),
        })
    }

    /// Interleaves the literals with the rendered substitutions.
    pub fn render<F: FnMut(&Substitution) -> String>(&self, mut f: F) -> String {
        let mut out = String::new();
        for (i, literal) in self.literals.iter().enumerate() {
            out.push_str(literal);
            if let Some(substitution) = self.substitutions.get(i) {
                out.push_str(&f(substitution));
            }
        }
        out
    }
}
