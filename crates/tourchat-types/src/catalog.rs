//! Catalog types: the navigable points of interest in a tour and the
//! demo vertical/locale keys that select prompt and reply templates.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency shown when an item has a price but no currency of its own.
pub const DEFAULT_CURRENCY: &str = "EGP";

/// A navigable point of interest (product, menu item, room, ...).
///
/// `id` is unique within one demo's catalog; it is the value carried by the
/// `[[FLY_TO:<id>]]` navigation sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemKnowledge {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form specifications (e.g. `{"capacity": "18 ft"}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<BTreeMap<String, serde_json::Value>>,
}

impl ItemKnowledge {
    /// Minimal item with only an id and a name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price: None,
            currency: None,
            category: None,
            extras: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: f64, currency: impl Into<String>) -> Self {
        self.price = Some(price);
        self.currency = Some(currency.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `"<currency> <price>"`, or `None` when the item has no price.
    pub fn price_label(&self) -> Option<String> {
        let price = self.price?;
        let currency = self
            .currency
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CURRENCY);
        Some(format!("{currency} {price}"))
    }

    /// Lowercased `name + " " + category`, the haystack for keyword matching.
    pub fn search_text(&self) -> String {
        match self.category.as_deref() {
            Some(category) => format!("{} {}", self.name, category).to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }

    /// First whitespace-separated token of the name, lowercased.
    pub fn first_name_token(&self) -> Option<String> {
        self.name.split_whitespace().next().map(str::to_lowercase)
    }
}

/// Look up an item by id.
pub fn find_item(catalog: &[ItemKnowledge], id: u64) -> Option<&ItemKnowledge> {
    catalog.iter().find(|item| item.id == id)
}

/// Persona/vertical key selecting prompt templates and category tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DemoType {
    Ecommerce,
    Showroom,
    Cafe,
    Hotel,
    RealEstate,
    /// Unknown vertical; served with the ecommerce templates.
    Other(String),
}

impl Default for DemoType {
    fn default() -> Self {
        DemoType::Ecommerce
    }
}

impl From<&str> for DemoType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "ecommerce" | "e-commerce" | "retail" | "store" => DemoType::Ecommerce,
            "showroom" => DemoType::Showroom,
            "cafe" | "café" | "restaurant" => DemoType::Cafe,
            "hotel" => DemoType::Hotel,
            "realestate" | "real-estate" | "real_estate" => DemoType::RealEstate,
            _ => DemoType::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for DemoType {
    fn from(s: String) -> Self {
        DemoType::from(s.as_str())
    }
}

impl From<DemoType> for String {
    fn from(demo_type: DemoType) -> Self {
        demo_type.to_string()
    }
}

impl fmt::Display for DemoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoType::Ecommerce => write!(f, "ecommerce"),
            DemoType::Showroom => write!(f, "showroom"),
            DemoType::Cafe => write!(f, "cafe"),
            DemoType::Hotel => write!(f, "hotel"),
            DemoType::RealEstate => write!(f, "realestate"),
            DemoType::Other(other) => write!(f, "{other}"),
        }
    }
}

/// Reply language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn is_arabic(self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        if s.trim().to_lowercase().starts_with("ar") {
            Locale::Ar
        } else {
            Locale::En
        }
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Locale::from(s.as_str())
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ar => write!(f, "ar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_uses_default_currency() {
        let mut item = ItemKnowledge::new(1, "Oven");
        assert_eq!(item.price_label(), None);
        item.price = Some(4500.0);
        assert_eq!(item.price_label().as_deref(), Some("EGP 4500"));
        item.currency = Some("USD".to_string());
        assert_eq!(item.price_label().as_deref(), Some("USD 4500"));
    }

    #[test]
    fn test_search_text_joins_name_and_category() {
        let item = ItemKnowledge::new(7, "Samsung Refrigerator").with_category("Refrigerators");
        assert_eq!(item.search_text(), "samsung refrigerator refrigerators");
        assert_eq!(item.first_name_token().as_deref(), Some("samsung"));
    }

    #[test]
    fn test_item_deserializes_with_missing_optionals() {
        let item: ItemKnowledge = serde_json::from_str(r#"{"id": 3, "name": "Latte"}"#).unwrap();
        assert_eq!(item, ItemKnowledge::new(3, "Latte"));
    }

    #[test]
    fn test_demo_type_parsing() {
        assert_eq!(DemoType::from("Hotel"), DemoType::Hotel);
        assert_eq!(DemoType::from("real-estate"), DemoType::RealEstate);
        assert_eq!(DemoType::from("retail"), DemoType::Ecommerce);
        assert_eq!(DemoType::from("museum"), DemoType::Other("museum".to_string()));

        let parsed: DemoType = serde_json::from_str("\"cafe\"").unwrap();
        assert_eq!(parsed, DemoType::Cafe);
        assert_eq!(serde_json::to_string(&DemoType::RealEstate).unwrap(), "\"realestate\"");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!(Locale::from("ar"), Locale::Ar);
        assert_eq!(Locale::from("ar-EG"), Locale::Ar);
        assert_eq!(Locale::from("en"), Locale::En);
        assert_eq!(Locale::from("fr"), Locale::En);
    }
}
