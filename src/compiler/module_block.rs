pub mod artifact;
pub mod scanner;
pub mod splice;

pub use artifact::build_artifact;
pub use scanner::{scan, Split, SplitKind};
pub use splice::{SplicePlan, Substitution};

/// Orders splits the way the splice plan consumes them, last offset first.
pub fn sort_descending(splits: &mut [Split]) {
    splits.sort_by(|a, b| b.span.start.cmp(&a.span.start));
}
