//! Conversation memory recomputed from caller-supplied history.

use tourchat_types::catalog::ItemKnowledge;
use tourchat_types::chat::{ChatTurn, MessageRole};

/// The most recently mentioned catalog item.
///
/// History is scanned newest to oldest; an item counts as mentioned when the
/// first token of its name appears in a turn. Within one turn the earliest
/// catalog entry wins. System turns are ignored.
pub fn last_mentioned<'c>(
    catalog: &'c [ItemKnowledge],
    history: &[ChatTurn],
) -> Option<&'c ItemKnowledge> {
    history
        .iter()
        .rev()
        .filter(|turn| turn.role != MessageRole::System)
        .find_map(|turn| {
            let content = turn.content.to_lowercase();
            catalog.iter().find(|item| {
                item.first_name_token()
                    .is_some_and(|token| token.chars().count() >= 2 && content.contains(&token))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<ItemKnowledge> {
        vec![
            ItemKnowledge::new(7, "Samsung Refrigerator"),
            ItemKnowledge::new(8, "LG Oven"),
            ItemKnowledge::new(9, "Samsung TV"),
        ]
    }

    #[test]
    fn test_newest_turn_wins() {
        let catalog = catalog();
        let history = vec![
            ChatTurn::user("tell me about the Samsung Refrigerator"),
            ChatTurn::assistant("Sure. We also have an LG oven."),
        ];
        assert_eq!(last_mentioned(&catalog, &history).map(|i| i.id), Some(8));
    }

    #[test]
    fn test_catalog_order_breaks_ties() {
        let catalog = catalog();
        let history = vec![ChatTurn::user("samsung stuff please")];
        assert_eq!(last_mentioned(&catalog, &history).map(|i| i.id), Some(7));
    }

    #[test]
    fn test_system_turns_and_misses() {
        let catalog = catalog();
        let history = vec![ChatTurn {
            role: MessageRole::System,
            content: "Samsung".to_string(),
        }];
        assert!(last_mentioned(&catalog, &history).is_none());
        assert!(last_mentioned(&catalog, &[]).is_none());
        assert!(last_mentioned(&[], &[ChatTurn::user("samsung")]).is_none());
    }
}
