//! Walking error chains
//!
//! Every error exposes its next node through [`Error::source`], so the walk
//! never needs to know concrete wrapper types. A [`StructuredError`] is
//! recognised by downcasting each node in turn, either directly or as a
//! `Box<StructuredError>` (boxed `#[source]` fields, double-boxed causes).

use std::error::Error;

use crate::{Category, StructuredError};

/// Iterator over an error and its successive sources, outermost first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and every error it wraps
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// This node as a [`StructuredError`], looking through one `Box`
///
/// `Box<StructuredError>` forwards `source()` to the inner error's cause, so
/// the boxed node must be matched here or the walk would step over it.
pub fn as_structured<'a>(node: &'a (dyn Error + 'static)) -> Option<&'a StructuredError> {
    node.downcast_ref::<StructuredError>()
        .or_else(|| node.downcast_ref::<Box<StructuredError>>().map(|boxed| &**boxed))
}

/// Whether this node is a [`StructuredError`]
pub fn is_structured(err: &(dyn Error + 'static)) -> bool {
    as_structured(err).is_some()
}

/// Whether any node in the chain is a [`StructuredError`]
pub fn contains_structured(err: &(dyn Error + 'static)) -> bool {
    chain(err).any(is_structured)
}

/// Nearest [`StructuredError`] in the chain, including `err` itself
pub fn find_structured<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a StructuredError> {
    chain(err).find_map(as_structured)
}

/// Category of the outermost [`StructuredError`] in the chain
///
/// Returns [`Category::Unknown`] when the chain holds no structured error.
pub fn classify(err: &(dyn Error + 'static)) -> Category {
    find_structured(err).map_or(Category::Unknown, StructuredError::kind)
}
