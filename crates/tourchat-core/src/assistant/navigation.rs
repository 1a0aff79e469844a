//! In-band navigation protocol: `[[FLY_TO:<id>]]` sentinels in reply text.
//!
//! Providers embed at most one sentinel per reply. Decoding strips every
//! sentinel (and any unterminated fragment) and turns the first well-formed
//! one into a structured [`NavigationDirective`] when its id resolves in the
//! catalog.

use std::sync::LazyLock;

use regex::Regex;
use tourchat_types::catalog::{ItemKnowledge, find_item};
use tourchat_types::chat::NavigationDirective;

pub const SENTINEL_PREFIX: &str = "[[FLY_TO:";

static SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[FLY_TO:([^\]]*)\]\]").expect("valid sentinel regex"));

static FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[FLY_TO:[^\s\]]*\]?").expect("valid fragment regex"));

static SPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("valid whitespace regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+([.,!?؟،])").expect("valid whitespace regex"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid whitespace regex"));

/// Result of decoding provider output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedReply {
    /// Display text; never contains [`SENTINEL_PREFIX`].
    pub text: String,
    pub navigation: Option<NavigationDirective>,
}

/// `[[FLY_TO:<item_id>]]`
pub fn encode(item_id: u64) -> String {
    format!("{SENTINEL_PREFIX}{item_id}]]")
}

/// Strip sentinels from `raw` and resolve the first well-formed one against
/// `catalog`.
///
/// The payload may be `<id>` or `<id>:<title>`; tokens with a non-numeric id
/// are stripped and skipped. Text without a sentinel is returned unchanged.
pub fn decode(raw: &str, catalog: &[ItemKnowledge]) -> DecodedReply {
    if !raw.contains(SENTINEL_PREFIX) {
        return DecodedReply {
            text: raw.to_string(),
            navigation: None,
        };
    }

    let navigation = SENTINEL
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .find_map(|payload| parse_id(payload.as_str()))
        .and_then(|id| resolve(id, catalog));

    let stripped = SENTINEL.replace_all(raw, " ");
    let stripped = FRAGMENT.replace_all(&stripped, " ");

    DecodedReply {
        text: tidy_whitespace(&stripped),
        navigation,
    }
}

fn parse_id(payload: &str) -> Option<u64> {
    let id_part = payload.split(':').next().unwrap_or_default().trim();
    match id_part.parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(payload, "Ignoring navigation sentinel with non-numeric id");
            None
        }
    }
}

fn resolve(id: u64, catalog: &[ItemKnowledge]) -> Option<NavigationDirective> {
    match find_item(catalog, id) {
        Some(item) => Some(NavigationDirective::fly_to(item)),
        None => {
            tracing::debug!(item_id = id, "Navigation sentinel id not in catalog");
            None
        }
    }
}

fn tidy_whitespace(text: &str) -> String {
    let text = SPACE_BEFORE_NEWLINE.replace_all(text, "\n");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = SPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
