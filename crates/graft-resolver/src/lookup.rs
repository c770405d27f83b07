//! Host-supplied lookup interfaces.
//!
//! The host owns the style and variable collections; the engine only sees
//! them through these read-only traits, injected into every resolution
//! call. A lookup that returns `None` means the reference no longer
//! resolves (deleted style, unbound variable); that is a normal outcome
//! and degrades the affected property to absent.

use graft_core::Paint;

/// Resolves a shared style id to its paint.
pub trait StyleLookup {
    fn style_by_id(&self, id: &str) -> Option<Paint>;
}

/// Resolves a bound variable id to the variable's name.
pub trait VariableLookup {
    fn variable_by_id(&self, id: &str) -> Option<String>;
}

/// Lookup for hosts without style or variable collections, and for tests.
/// Every reference resolves to absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLookup;

impl StyleLookup for NullLookup {
    fn style_by_id(&self, _id: &str) -> Option<Paint> {
        None
    }
}

impl VariableLookup for NullLookup {
    fn variable_by_id(&self, _id: &str) -> Option<String> {
        None
    }
}

impl<F> StyleLookup for F
where
    F: Fn(&str) -> Option<Paint>,
{
    fn style_by_id(&self, id: &str) -> Option<Paint> {
        self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_core::Rgba;

    #[test]
    fn test_null_lookup_resolves_nothing() {
        assert_eq!(NullLookup.style_by_id("S:1"), None);
        assert_eq!(NullLookup.variable_by_id("V:1"), None);
    }

    #[test]
    fn test_closure_as_style_lookup() {
        let lookup = |id: &str| {
            (id == "S:red").then(|| Paint::Solid(Rgba::rgb(255, 0, 0)))
        };
        assert!(lookup.style_by_id("S:red").is_some());
        assert!(lookup.style_by_id("S:gone").is_none());
    }
}
