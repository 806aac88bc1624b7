//! In-memory template catalog with id lookup.

use std::collections::HashMap;

use crate::fallback;
use crate::template::{CatalogKind, Template};

/// An immutable set of templates keyed by id.
///
/// Catalogs are swapped wholesale when a load completes; they are never
/// merged or edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from templates. On duplicate ids the first entry wins.
    pub fn new(templates: Vec<Template>) -> Self {
        let mut index = HashMap::with_capacity(templates.len());
        for (i, template) in templates.iter().enumerate() {
            index.entry(template.id.clone()).or_insert(i);
        }
        Self { templates, index }
    }

    /// A catalog that has not loaded yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog for `kind`, always non-empty.
    pub fn builtin(kind: CatalogKind) -> Self {
        Self::new(fallback::templates(kind))
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::GradientKind;

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin(CatalogKind::Patterns);
        let dots = catalog.get("dots").unwrap();
        assert_eq!(dots.name, "Polka Dots");
        assert!(catalog.contains("hexagon"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn empty_catalog_has_nothing() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("dots").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let catalog = Catalog::new(vec![
            Template::new("a", "First", GradientKind::Linear, "", "x"),
            Template::new("a", "Second", GradientKind::Linear, "", "y"),
        ]);
        assert_eq!(catalog.get("a").unwrap().name, "First");
    }

    #[test]
    fn ids_preserve_order() {
        let catalog = Catalog::builtin(CatalogKind::Gradients);
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids.first(), Some(&"linear-horizontal"));
        assert_eq!(ids.last(), Some(&"conic-center"));
    }
}
