//! Deterministic rule-based responder used when no remote provider answers.
//!
//! Rules are evaluated in a fixed priority order and the first one that
//! produces a reply wins. Every path ends in a non-empty reply, so this engine
//! is the terminal link of the provider chain.

pub mod extract;
pub(crate) mod lexicon;
pub mod memory;
pub mod replies;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tourchat_types::catalog::{DemoType, ItemKnowledge, Locale};
use tourchat_types::chat::ChatTurn;

use self::lexicon::{
    AFFIRMATIVES, CategoryEntry, DEICTICS, NAV_VERBS, PRICE_WORDS, TOUR_WORDS, categories_for,
    contains_any_word, contains_keyword, content_terms, has_arabic, term_matches,
};

static OVERVIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bwhat\b.*\b(?:have|sell|offer)\b|\b(?:catalog|catalogue|menu|collection|everything|inventory)\b|\bwhat(?:'s| is) (?:here|available)\b|شو عند|وش عند|ايش عند|إيش عند|ماذا (?:لديكم|عندكم)|المنيو|القائمة|كل المنتجات",
    )
    .expect("valid overview regex")
});

static HELP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:help|assist|support|what can you do|how does this work)\b|مساعدة|ساعدني|تساعدني|دعم",
    )
    .expect("valid help regex")
});

static GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\W*(?:hello|hi|hey|greetings|good (?:morning|afternoon|evening))\b|مرحبا|أهلا|اهلا|السلام عليكم|صباح الخير|مساء الخير|هلا",
    )
    .expect("valid greeting regex")
});

static THANKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:thanks|thank you|thx|bye|goodbye)\b|شكرا|شكراً|مع السلامة|يعطيك العافية")
        .expect("valid thanks regex")
});

/// Which rule produced a reply. Logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NavigateToReference,
    CategoryIntent,
    SingleNameMatch,
    SeveralNameMatches,
    PriceIntent,
    Confirmation,
    StartTour,
    Overview,
    Help,
    Greeting,
    Thanks,
    Fallback,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::NavigateToReference => "navigate_to_reference",
            Rule::CategoryIntent => "category_intent",
            Rule::SingleNameMatch => "single_name_match",
            Rule::SeveralNameMatches => "several_name_matches",
            Rule::PriceIntent => "price_intent",
            Rule::Confirmation => "confirmation",
            Rule::StartTour => "start_tour",
            Rule::Overview => "overview",
            Rule::Help => "help",
            Rule::Greeting => "greeting",
            Rule::Thanks => "thanks",
            Rule::Fallback => "fallback",
        }
    }
}

/// Rule engine over one request's catalog.
#[derive(Debug, Clone)]
pub struct LocalReasoningEngine<'a> {
    catalog: Cow<'a, [ItemKnowledge]>,
    demo_type: DemoType,
}

impl<'a> LocalReasoningEngine<'a> {
    pub fn new(catalog: &'a [ItemKnowledge], demo_type: &DemoType) -> Self {
        Self {
            catalog: Cow::Borrowed(catalog),
            demo_type: demo_type.clone(),
        }
    }

    /// Build an engine from rendered prompt text, re-extracting the catalog.
    pub fn from_prompt(prompt: &str, demo_type: &DemoType) -> LocalReasoningEngine<'static> {
        LocalReasoningEngine {
            catalog: Cow::Owned(extract::extract_catalog(prompt)),
            demo_type: demo_type.clone(),
        }
    }

    pub fn catalog(&self) -> &[ItemKnowledge] {
        &self.catalog
    }

    /// Answer `message` given the full conversation `history`. Never empty.
    pub fn respond(&self, history: &[ChatTurn], message: &str) -> String {
        let (rule, reply) = self.evaluate(history, message);
        tracing::debug!(rule = rule.as_str(), "Local engine answered");
        reply
    }

    /// Like [`respond`](Self::respond) but also reports the rule that fired.
    pub fn evaluate(&self, history: &[ChatTurn], message: &str) -> (Rule, String) {
        let locale = if has_arabic(message) {
            Locale::Ar
        } else {
            Locale::En
        };
        let (rule, reply) = self.apply_rules(history, message, locale);
        if reply.trim().is_empty() {
            return (Rule::Fallback, replies::fallback(&self.catalog, locale));
        }
        (rule, reply)
    }

    fn apply_rules(&self, history: &[ChatTurn], message: &str, locale: Locale) -> (Rule, String) {
        let catalog: &[ItemKnowledge] = &self.catalog;
        let text = message.to_lowercase();
        let wants_navigation = contains_any_word(&text, NAV_VERBS);
        let last = memory::last_mentioned(catalog, history);

        if wants_navigation && contains_any_word(&text, DEICTICS) {
            if let Some(item) = last {
                return (
                    Rule::NavigateToReference,
                    replies::navigate_to_reference(item, locale),
                );
            }
        }

        if let Some((entry, matches)) = self.category_hit(&text) {
            let label = match locale {
                Locale::En => entry.label_en,
                Locale::Ar => entry.label_ar,
            };
            return (
                Rule::CategoryIntent,
                replies::category_matches(label, &matches, wants_navigation, locale),
            );
        }

        let terms = content_terms(message);
        let named = name_matches(catalog, &terms);
        match named.as_slice() {
            [] => {}
            [item] => {
                return (
                    Rule::SingleNameMatch,
                    replies::single_name_match(item, wants_navigation, locale),
                );
            }
            several => {
                return (
                    Rule::SeveralNameMatches,
                    replies::several_name_matches(several, locale),
                );
            }
        }

        if contains_any_word(&text, PRICE_WORDS) {
            if let Some((item, price)) = last.and_then(|item| item.price_label().map(|p| (item, p)))
            {
                return (Rule::PriceIntent, replies::item_price(item, &price, locale));
            }
            let priced: Vec<&ItemKnowledge> =
                catalog.iter().filter(|item| item.price.is_some()).collect();
            let reply = if priced.is_empty() {
                replies::pricing_help(locale)
            } else {
                replies::price_list(&priced, locale)
            };
            return (Rule::PriceIntent, reply);
        }

        if contains_any_word(&text, AFFIRMATIVES) {
            if let Some(item) = last {
                return (Rule::Confirmation, replies::confirmation(item, locale));
            }
        }

        if wants_navigation && (contains_any_word(&text, TOUR_WORDS) || terms.is_empty()) {
            if let Some(first) = catalog.first() {
                return (Rule::StartTour, replies::start_tour(first, locale));
            }
        }

        if OVERVIEW.is_match(&text) {
            return (Rule::Overview, replies::overview(catalog, locale));
        }
        if HELP.is_match(&text) {
            return (Rule::Help, replies::help(catalog.len(), locale));
        }
        if GREETING.is_match(&text) {
            return (Rule::Greeting, replies::greeting(catalog.len(), locale));
        }
        if THANKS.is_match(&text) {
            return (Rule::Thanks, replies::thanks(locale));
        }

        (Rule::Fallback, replies::fallback(catalog, locale))
    }

    /// First category of this demo type whose keyword appears in the message
    /// and which matches at least one catalog item.
    fn category_hit(&self, text: &str) -> Option<(&'static CategoryEntry, Vec<&ItemKnowledge>)> {
        categories_for(&self.demo_type)
            .iter()
            .filter(|entry| entry.keywords.iter().any(|kw| contains_keyword(text, kw)))
            .find_map(|entry| {
                let matches: Vec<&ItemKnowledge> = self
                    .catalog
                    .iter()
                    .filter(|item| {
                        let haystack = item.search_text();
                        entry.keywords.iter().any(|kw| contains_keyword(&haystack, kw))
                    })
                    .collect();
                (!matches.is_empty()).then_some((entry, matches))
            })
    }
}

/// Every item whose name or category contains at least one content term, in
/// catalog order.
fn name_matches<'c>(catalog: &'c [ItemKnowledge], terms: &[String]) -> Vec<&'c ItemKnowledge> {
    if terms.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|item| {
            let haystack = item.search_text();
            terms.iter().any(|t| term_matches(&haystack, t))
        })
        .collect()
}
