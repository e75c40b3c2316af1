use std::rc::Rc;

use leptos::*;
use shared::Property;

/// Properties shipped with the app.
#[derive(Clone)]
pub struct Catalog {
    properties: Rc<Vec<Property>>,
}

impl Catalog {
    pub fn embedded() -> Self {
        Self {
            properties: Rc::new(load_properties(include_str!("data/properties.json"))),
        }
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: u32) -> Option<Property> {
        self.properties.iter().find(|p| p.id == id).cloned()
    }
}

fn load_properties(json: &str) -> Vec<Property> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::error!("Embedded catalog is invalid: {}", e);
        Vec::new()
    })
}

/// Provide the catalog to the application
pub fn provide_catalog() {
    provide_context(Catalog::embedded());
}

/// Use the catalog from within a component
pub fn use_catalog() -> Catalog {
    expect_context::<Catalog>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.all().len(), 4);
        assert!(catalog.all().iter().all(|p| p.price > 0 && p.guests > 0));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.get(1).map(|p| p.location), Some("Zlatibor, Serbia".to_string()));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_invalid_catalog_is_empty() {
        assert!(load_properties("{}").is_empty());
    }
}
