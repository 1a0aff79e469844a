//! `tourchat ask`: one pipeline turn from the terminal.
//!
//! Builds the same [`ChatRequest`] the HTTP endpoint receives, optionally
//! loading the catalog and history from JSON files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;
use serde::de::DeserializeOwned;

use tourchat_types::catalog::{ItemKnowledge, Locale};
use tourchat_types::chat::{AssistantReply, ChatRequest, ChatTurn};
use tourchat_types::error::ChatError;

use crate::state::AppState;

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The visitor's message.
    pub message: String,

    /// Demo type (ecommerce, showroom, cafe, hotel, realestate).
    #[arg(long, default_value = "ecommerce")]
    pub demo_type: String,

    /// Demo title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Business name (defaults to the title).
    #[arg(long)]
    pub business: Option<String>,

    /// Where the visitor currently is in the tour.
    #[arg(long)]
    pub location: Option<String>,

    /// Reply locale (en, ar).
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// JSON file with an array of catalog items.
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// JSON file with an array of prior turns (`{role, content}`).
    #[arg(long)]
    pub history: Option<PathBuf>,
}

impl AskArgs {
    async fn into_request(self) -> Result<ChatRequest> {
        let items = match &self.items {
            Some(path) => Some(read_json::<Vec<ItemKnowledge>>(path).await?),
            None => None,
        };
        let history = match &self.history {
            Some(path) => read_json::<Vec<ChatTurn>>(path).await?,
            None => Vec::new(),
        };

        Ok(ChatRequest {
            message: self.message,
            demo_id: "cli".to_string(),
            demo_type: self.demo_type.into(),
            demo_title: self.title,
            business_name: self.business,
            current_location: self.location,
            history,
            locale: Locale::from(self.locale),
            items,
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Run one turn and print the reply.
pub async fn ask(state: &AppState, args: AskArgs, json: bool) -> Result<()> {
    let request = args.into_request().await?;

    let reply = match state.chat_service.handle(&request).await {
        Ok(reply) => reply,
        Err(ChatError::Validation(msg)) => bail!("{msg}"),
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print_reply(&reply);
    }
    Ok(())
}

fn print_reply(reply: &AssistantReply) {
    println!();
    println!("  {} {}", style("💬").bold(), reply.message);
    if let Some(nav) = &reply.navigation {
        println!(
            "  {} {} {}",
            style("✈").cyan(),
            style(&nav.item_name).cyan().bold(),
            style(format!("(#{})", nav.item_id)).dim()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tourchat_types::catalog::DemoType;

    use super::*;

    fn args(message: &str) -> AskArgs {
        AskArgs {
            message: message.to_string(),
            demo_type: "hotel".to_string(),
            title: "Nile Hotel".to_string(),
            business: None,
            location: None,
            locale: "ar".to_string(),
            items: None,
            history: None,
        }
    }

    #[tokio::test]
    async fn test_into_request_without_files() {
        let request = args("hello").into_request().await.unwrap();
        assert_eq!(request.message, "hello");
        assert_eq!(request.demo_type, DemoType::Hotel);
        assert_eq!(request.locale, Locale::Ar);
        assert!(request.items.is_none());
        assert!(request.history.is_empty());
    }

    #[tokio::test]
    async fn test_into_request_reads_items_and_history() {
        let tmp = TempDir::new().unwrap();
        let items_path = tmp.path().join("items.json");
        let history_path = tmp.path().join("history.json");
        tokio::fs::write(
            &items_path,
            r#"[{"id": 3, "name": "Deluxe Suite", "category": "Rooms", "price": 4500}]"#,
        )
        .await
        .unwrap();
        tokio::fs::write(
            &history_path,
            r#"[{"role": "user", "content": "tell me about the suite"}]"#,
        )
        .await
        .unwrap();

        let mut a = args("yes");
        a.items = Some(items_path);
        a.history = Some(history_path);
        let request = a.into_request().await.unwrap();
        let items = request.items.unwrap();
        assert_eq!(items[0].id, 3);
        assert_eq!(items[0].name, "Deluxe Suite");
        assert_eq!(request.history.len(), 1);
    }

    #[tokio::test]
    async fn test_into_request_reports_bad_json() {
        let tmp = TempDir::new().unwrap();
        let items_path = tmp.path().join("items.json");
        tokio::fs::write(&items_path, "not json").await.unwrap();

        let mut a = args("hello");
        a.items = Some(items_path);
        let err = a.into_request().await.unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }
}
