//! `tourchat status`: configuration and provider chain overview.

use anyhow::Result;
use console::style;

use tourchat_core::llm::chain::LOCAL_PROVIDER_NAME;

use crate::state::AppState;

pub fn status(state: &AppState, json: bool) -> Result<()> {
    let health = state.chat_service.health();
    let chain: Vec<&str> = state
        .chat_service
        .chain()
        .remote_names()
        .into_iter()
        .chain(std::iter::once(LOCAL_PROVIDER_NAME))
        .collect();
    let settings = &state.config.assistant;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "config_path": state.config_path.display().to_string(),
            "chain": chain,
            "health": health,
            "assistant": settings,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} tourchat v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "  {}",
        style(format!("config: {}", state.config_path.display())).dim()
    );
    println!();

    println!("  {}", style("── Providers ──").dim());
    println!("  {} poe", check_mark(health.provider_a_configured));
    println!("  {} openrouter", check_mark(health.provider_b_configured));
    println!("  {} local", check_mark(true));
    println!("  Chain:    {}", style(chain.join(" → ")).cyan());
    println!();

    println!("  {}", style("── Settings ──").dim());
    println!("  Timeout:       {} ms", settings.provider_timeout_ms);
    println!("  History:       {} turns", settings.history_window);
    println!("  Catalog limit: {} items", settings.max_catalog_items);
    println!();

    Ok(())
}
