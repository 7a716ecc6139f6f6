//! Naming-convention variables derived from an entity name.

use anvil_core::{pluralize, singularize, to_snake_case, to_studly_case, upper_first};
use chrono::Datelike;
use serde::Serialize;

/// Read-only naming view of an entity, computed fresh for each render.
///
/// ```
/// use anvil_codegen::NamingVariables;
///
/// let naming = NamingVariables::new("EcommerceOrderCreator");
/// assert_eq!(naming.entities, "EcommerceOrderCreators");
/// assert_eq!(naming.collection, "ecommerce_order_creators");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingVariables {
    /// Studly singular, e.g. `Order`
    #[serde(rename = "Entity")]
    pub entity: String,
    /// Studly plural, e.g. `Orders`
    #[serde(rename = "Entities")]
    pub entities: String,
    /// Snake plural, e.g. `orders`
    pub collection: String,
    /// Snake singular, e.g. `order`
    pub instance: String,
    pub year: i32,
}

impl NamingVariables {
    pub fn new(entity_name: &str) -> Self {
        let entity = to_studly_case(&singularize(entity_name.trim()));
        let instance = to_snake_case(&entity);
        Self {
            entities: pluralize(&entity),
            collection: pluralize(&instance),
            entity,
            instance,
            year: chrono::Local::now().year(),
        }
    }

    /// Pin the year stamp.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Controller identifier used in route declarations: the collection
    /// with its first letter capitalized.
    pub fn controller(&self) -> String {
        upper_first(&self.collection)
    }
}
