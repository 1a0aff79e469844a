//! Recover catalog entries from rendered prompt text.

use tourchat_types::catalog::ItemKnowledge;

const ID_MARKER: &str = "[ID:";

/// Parse every `[ID:<id>] <name> (<category>) - <currency> <amount> - <description>`
/// line in `prompt`. Optional groups may be missing; lines without a valid
/// numeric id are skipped. Duplicate ids keep their first occurrence.
pub fn extract_catalog(prompt: &str) -> Vec<ItemKnowledge> {
    let mut items: Vec<ItemKnowledge> = Vec::new();
    for line in prompt.lines() {
        let Some(item) = parse_line(line) else {
            continue;
        };
        if items.iter().all(|existing| existing.id != item.id) {
            items.push(item);
        }
    }
    items
}

fn parse_line(line: &str) -> Option<ItemKnowledge> {
    let start = line.find(ID_MARKER)? + ID_MARKER.len();
    let rest = &line[start..];
    let close = rest.find(']')?;
    let id: u64 = rest[..close].trim().parse().ok()?;

    let mut segments = rest[close + 1..].split(" - ");
    let head = segments.next()?.trim();
    let (name, category) = split_category(head);
    if name.is_empty() {
        return None;
    }

    let mut item = ItemKnowledge::new(id, name);
    item.category = category.map(str::to_string);

    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if item.price.is_none() && item.description.is_none() {
            if let Some((currency, amount)) = parse_price(segment) {
                item.price = Some(amount);
                item.currency = Some(currency.to_string());
                continue;
            }
        }
        match item.description.as_mut() {
            Some(description) => {
                description.push_str(" - ");
                description.push_str(segment);
            }
            None => item.description = Some(segment.to_string()),
        }
    }

    Some(item)
}

/// `"Samsung Refrigerator (Refrigerators)"` -> name and category.
fn split_category(head: &str) -> (&str, Option<&str>) {
    if let Some(stripped) = head.strip_suffix(')') {
        if let Some(open) = stripped.rfind(" (") {
            let category = stripped[open + 2..].trim();
            let name = stripped[..open].trim();
            if !name.is_empty() {
                return (name, Some(category).filter(|c| !c.is_empty()));
            }
        }
    }
    (head, None)
}

/// `"EGP 18999"` or `"EGP 18,999.50"`.
fn parse_price(segment: &str) -> Option<(&str, f64)> {
    let mut parts = segment.split_whitespace();
    let currency = parts.next()?;
    let amount = parts.next()?;
    if parts.next().is_some() || currency.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let amount: f64 = amount.replace(',', "").parse().ok()?;
    amount.is_finite().then_some((currency, amount))
}

#[cfg(test)]
mod tests {
    use tourchat_types::catalog::{DemoType, Locale};

    use super::*;
    use crate::assistant::prompt::PromptBuilder;

    #[test]
    fn test_extracts_full_line() {
        let items =
            extract_catalog("1. [ID:7] Samsung Refrigerator (Refrigerators) - EGP 18999 - No-frost");
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Samsung Refrigerator");
        assert_eq!(item.category.as_deref(), Some("Refrigerators"));
        assert_eq!(item.price, Some(18999.0));
        assert_eq!(item.currency.as_deref(), Some("EGP"));
        assert_eq!(item.description.as_deref(), Some("No-frost"));
    }

    #[test]
    fn test_tolerates_missing_groups() {
        let items = extract_catalog("[ID:3] Latte\n[ID:4] Oven - EGP 4,500\n[ID:5] Sofa - Velvet, three seats");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], ItemKnowledge::new(3, "Latte"));
        assert_eq!(items[1].price, Some(4500.0));
        assert_eq!(items[2].price, None);
        assert_eq!(items[2].description.as_deref(), Some("Velvet, three seats"));
    }

    #[test]
    fn test_skips_malformed_ids() {
        let items = extract_catalog("[ID:abc] Broken\n[ID:] Empty\nno marker here\n[ID:2] Chair");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_reads_back_rendered_block() {
        let catalog = vec![
            ItemKnowledge::new(7, "Samsung Refrigerator")
                .with_category("Refrigerators")
                .with_price(18999.0, "EGP"),
            ItemKnowledge::new(8, "LG Washing Machine").with_description("8kg front load"),
        ];
        let block =
            PromptBuilder::build_catalog_block(&catalog, &DemoType::Ecommerce, Locale::En, 50);
        let extracted = extract_catalog(&block);
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[0].name, "Samsung Refrigerator");
        assert_eq!(extracted[0].price, Some(18999.0));
        assert_eq!(extracted[1].description.as_deref(), Some("8kg front load"));
    }
}
