use crate::references::ReferenceToken;

use super::{ResolvedReference, Resolver};

/// Renders every reference unresolved; lookup is deferred to click time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyResolver;

impl Resolver for LazyResolver {
    fn resolve(&self, token: &ReferenceToken) -> ResolvedReference {
        ResolvedReference::unresolved(token)
    }
}
