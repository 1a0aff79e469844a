//! Chat request, session context and reply types.
//!
//! Everything here is request-scoped: the caller supplies the full history
//! on every turn and nothing is persisted between requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{DemoType, ItemKnowledge, Locale};
pub use crate::llm::MessageRole;

/// One caller-supplied turn of conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub demo_id: String,
    #[serde(default)]
    pub demo_type: DemoType,
    #[serde(default)]
    pub demo_title: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub items: Option<Vec<ItemKnowledge>>,
}

/// Per-request view of the demo the visitor is chatting in.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub demo_id: String,
    pub demo_type: DemoType,
    pub demo_title: String,
    pub business_name: Option<String>,
    pub current_location: Option<String>,
    pub locale: Locale,
    pub catalog: Vec<ItemKnowledge>,
}

impl SessionContext {
    /// Build the context for one request. Blank optional strings are treated as absent.
    pub fn from_request(request: &ChatRequest) -> Self {
        Self {
            demo_id: request.demo_id.clone(),
            demo_type: request.demo_type.clone(),
            demo_title: request.demo_title.trim().to_string(),
            business_name: non_blank(request.business_name.as_deref()),
            current_location: non_blank(request.current_location.as_deref()),
            locale: request.locale,
            catalog: request.items.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// What the tour client should do with its camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    #[serde(rename = "flyTo")]
    FlyTo,
}

/// Structured navigation instruction decoded from a `[[FLY_TO:<id>]]` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDirective {
    pub action: NavigationAction,
    pub item_id: u64,
    pub item_name: String,
}

impl NavigationDirective {
    pub fn fly_to(item: &ItemKnowledge) -> Self {
        Self {
            action: NavigationAction::FlyTo,
            item_id: item.id,
            item_name: item.name.clone(),
        }
    }
}

/// Successful response of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Display text; never contains a navigation sentinel.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationDirective>,
}

/// Response of `GET /chat/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub provider_a_configured: bool,
    pub provider_b_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserializes_camel_case() {
        let json = r#"{
            "message": "show me refrigerators",
            "demoId": "awni",
            "demoType": "ecommerce",
            "demoTitle": "Awni Electronics",
            "businessName": "  ",
            "history": [{"role": "user", "content": "hi"}],
            "locale": "ar",
            "items": [{"id": 7, "name": "Samsung Refrigerator", "price": 18999, "currency": "EGP"}]
        }"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.demo_type, DemoType::Ecommerce);
        assert_eq!(request.locale, Locale::Ar);
        assert_eq!(request.history.len(), 1);

        let context = SessionContext::from_request(&request);
        assert_eq!(context.business_name, None);
        assert_eq!(context.catalog.len(), 1);
        assert_eq!(context.catalog[0].price, Some(18999.0));
    }

    #[test]
    fn test_chat_request_defaults_missing_fields() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert!(request.history.is_empty());
        assert!(request.items.is_none());
        assert_eq!(request.locale, Locale::En);
    }

    #[test]
    fn test_reply_serializes_navigation_in_camel_case() {
        let item = ItemKnowledge::new(7, "Samsung Refrigerator");
        let reply = AssistantReply {
            message: "Here it is".to_string(),
            timestamp: Utc::now(),
            navigation: Some(NavigationDirective::fly_to(&item)),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["navigation"]["action"], "flyTo");
        assert_eq!(json["navigation"]["itemId"], 7);
        assert_eq!(json["navigation"]["itemName"], "Samsung Refrigerator");
    }

    #[test]
    fn test_reply_omits_absent_navigation() {
        let reply = AssistantReply {
            message: "Hello".to_string(),
            timestamp: Utc::now(),
            navigation: None,
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(!json.contains("navigation"));
    }

    #[test]
    fn test_health_status_field_names() {
        let status = HealthStatus {
            status: "ok".to_string(),
            provider_a_configured: true,
            provider_b_configured: false,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["providerAConfigured"], true);
        assert_eq!(json["providerBConfigured"], false);
    }
}
