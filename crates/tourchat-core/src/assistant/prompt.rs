//! System prompt builder for tour assistants.
//!
//! Layout:
//! ```text
//! {persona for demo type + locale}
//! {location sentence, when known}
//!
//! {catalog header}
//! 1. [ID:7] Samsung Refrigerator (Refrigerators) - EGP 18999 - No-frost, 18 ft
//!    Specs: capacity: 18 ft, color: silver
//! ...
//! {navigation sentinel instructions}
//! ```
//!
//! The catalog lines are also the input format of
//! [`extract_catalog`](super::local::extract::extract_catalog).

use std::fmt::Write as _;

use tourchat_types::catalog::{DemoType, ItemKnowledge, Locale};
use tourchat_types::chat::SessionContext;

const DESCRIPTION_LIMIT: usize = 100;

/// Builds persona and catalog prompt text. Pure and deterministic.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Persona prompt for the demo's vertical in the requested locale.
    pub fn build_persona(
        demo_type: &DemoType,
        demo_title: &str,
        business_name: Option<&str>,
        locale: Locale,
        current_location: Option<&str>,
    ) -> String {
        let name = business_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| Some(demo_title.trim()).filter(|t| !t.is_empty()))
            .unwrap_or(match locale {
                Locale::En => "Virtual Tour",
                Locale::Ar => "الجولة الافتراضية",
            });

        let mut persona = persona_template(demo_type, locale).replace("{name}", name);

        if let Some(location) = current_location.map(str::trim).filter(|l| !l.is_empty()) {
            let sentence = match locale {
                Locale::En => format!("The user is currently viewing: {location}."),
                Locale::Ar => format!("المستخدم حالياً يشاهد: {location}."),
            };
            persona.push_str("\n\n");
            persona.push_str(&sentence);
        }

        persona
    }

    /// Numbered catalog listing plus navigation instructions.
    ///
    /// Returns an empty string for an empty catalog so the model is never
    /// handed an inventory section with nothing in it.
    pub fn build_catalog_block(
        catalog: &[ItemKnowledge],
        demo_type: &DemoType,
        locale: Locale,
        max_items: usize,
    ) -> String {
        if catalog.is_empty() || max_items == 0 {
            return String::new();
        }

        let shown = catalog.len().min(max_items);
        let mut block = String::new();
        block.push_str(&catalog_header(demo_type, locale, catalog.len()));
        block.push('\n');

        for (index, item) in catalog.iter().take(shown).enumerate() {
            block.push_str(&render_item_line(index + 1, item));
            block.push('\n');
            if let Some(specs) = render_specs(item) {
                block.push_str(&specs);
                block.push('\n');
            }
        }

        if shown < catalog.len() {
            let omitted = catalog.len() - shown;
            match locale {
                Locale::En => {
                    let _ = writeln!(block, "({omitted} more items not listed)");
                }
                Locale::Ar => {
                    let _ = writeln!(block, "({omitted} عناصر أخرى غير مدرجة)");
                }
            }
        }

        block.push('\n');
        block.push_str(navigation_instructions(locale));
        block
    }

    /// Persona, a blank line, then the catalog block when there is one.
    pub fn build_system_prompt(context: &SessionContext, max_items: usize) -> String {
        let persona = Self::build_persona(
            &context.demo_type,
            &context.demo_title,
            context.business_name.as_deref(),
            context.locale,
            context.current_location.as_deref(),
        );
        let block = Self::build_catalog_block(
            &context.catalog,
            &context.demo_type,
            context.locale,
            max_items,
        );
        if block.is_empty() {
            persona
        } else {
            format!("{persona}\n\n{block}")
        }
    }
}

/// `N. [ID:<id>] <name> (<category>) - <currency> <price> - <description>`
pub(crate) fn render_item_line(number: usize, item: &ItemKnowledge) -> String {
    let mut line = format!("{number}. [ID:{}] {}", item.id, single_line(&item.name));
    if let Some(category) = item.category.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = write!(line, " ({})", single_line(category));
    }
    if let Some(price) = item.price_label() {
        let _ = write!(line, " - {price}");
    }
    if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let _ = write!(line, " - {}", truncate_chars(&single_line(description), DESCRIPTION_LIMIT));
    }
    line
}

fn render_specs(item: &ItemKnowledge) -> Option<String> {
    let extras = item.extras.as_ref().filter(|e| !e.is_empty())?;
    let pairs: Vec<String> = extras
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => single_line(s),
                other => other.to_string(),
            };
            format!("{key}: {value}")
        })
        .collect();
    Some(format!("   Specs: {}", pairs.join(", ")))
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => text[..cut].trim_end().to_string(),
        None => text.to_string(),
    }
}

fn catalog_header(demo_type: &DemoType, locale: Locale, count: usize) -> String {
    let noun = match (demo_type, locale) {
        (DemoType::Cafe, Locale::En) => "Menu items",
        (DemoType::Hotel, Locale::En) => "Rooms and facilities",
        (DemoType::RealEstate, Locale::En) => "Spaces in this property",
        (DemoType::Showroom, Locale::En) => "Pieces on display",
        (_, Locale::En) => "Products in this store",
        (DemoType::Cafe, Locale::Ar) => "عناصر القائمة",
        (DemoType::Hotel, Locale::Ar) => "الغرف والمرافق",
        (DemoType::RealEstate, Locale::Ar) => "مساحات العقار",
        (DemoType::Showroom, Locale::Ar) => "القطع المعروضة",
        (_, Locale::Ar) => "المنتجات في المتجر",
    };
    match locale {
        Locale::En => format!("{noun} ({count} total). Only mention items from this list:"),
        Locale::Ar => format!("{noun} ({count} إجمالاً). اذكر فقط العناصر من هذه القائمة:"),
    }
}

fn navigation_instructions(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "Navigation: to move the visitor's camera to an item, include [[FLY_TO:<id>]] in your reply, \
using the numeric ID from the list above (for example [[FLY_TO:7]]). \
Use at most one per reply and only for items listed here. \
Never invent items, prices or IDs that are not in this list."
        }
        Locale::Ar => {
            "التنقل: لنقل كاميرا الزائر إلى عنصر، أضف [[FLY_TO:<id>]] في ردك \
باستخدام الرقم التعريفي من القائمة أعلاه (مثال: [[FLY_TO:7]]). \
استخدم واحداً فقط في كل رد ولعناصر هذه القائمة فقط. \
لا تخترع عناصر أو أسعاراً أو أرقاماً غير موجودة في القائمة."
        }
    }
}

fn persona_template(demo_type: &DemoType, locale: Locale) -> &'static str {
    match (demo_type, locale) {
        (DemoType::Showroom, Locale::En) => SHOWROOM_EN,
        (DemoType::Showroom, Locale::Ar) => SHOWROOM_AR,
        (DemoType::Cafe, Locale::En) => CAFE_EN,
        (DemoType::Cafe, Locale::Ar) => CAFE_AR,
        (DemoType::Hotel, Locale::En) => HOTEL_EN,
        (DemoType::Hotel, Locale::Ar) => HOTEL_AR,
        (DemoType::RealEstate, Locale::En) => REAL_ESTATE_EN,
        (DemoType::RealEstate, Locale::Ar) => REAL_ESTATE_AR,
        (DemoType::Ecommerce | DemoType::Other(_), Locale::En) => ECOMMERCE_EN,
        (DemoType::Ecommerce | DemoType::Other(_), Locale::Ar) => ECOMMERCE_AR,
    }
}

const ECOMMERCE_EN: &str = "You are a friendly and knowledgeable shopping assistant for {name}, an electronics store. \
You help customers find products, answer questions about specifications, compare items, and guide them through the virtual store.

Key behaviors:
- Be helpful, concise, and enthusiastic about products
- Suggest relevant products based on customer needs
- Offer to navigate them to product locations
- Provide pricing and availability information when asked
- Keep responses brief (2-3 sentences max unless explaining technical details)";

const ECOMMERCE_AR: &str = "أنت مساعد تسوق ودود ومطلع في {name}، متجر إلكترونيات. \
تساعد العملاء في العثور على المنتجات والإجابة على الأسئلة حول المواصفات ومقارنة العناصر وإرشادهم خلال المتجر الافتراضي.

السلوكيات الرئيسية:
- كن مفيداً وموجزاً ومتحمساً للمنتجات
- اقترح منتجات ذات صلة بناءً على احتياجات العميل
- اعرض توجيههم إلى مواقع المنتجات
- قدم معلومات الأسعار والتوافر عند السؤال
- اجعل الردود مختصرة (2-3 جمل كحد أقصى إلا عند شرح التفاصيل التقنية)";

const SHOWROOM_EN: &str = "You are an interior design consultant for {name}, a premium furniture showroom. \
You help customers explore furniture collections, discuss materials and dimensions, and create the perfect space for their homes.

Key behaviors:
- Be sophisticated and knowledgeable about design
- Discuss materials, craftsmanship, and design philosophy
- Suggest complementary items and complete looks
- Provide pricing and delivery information
- Keep responses elegant and concise";

const SHOWROOM_AR: &str = "أنت مستشار تصميم داخلي في {name}، معرض أثاث فاخر. \
تساعد العملاء في استكشاف مجموعات الأثاث ومناقشة المواد والأبعاد وإنشاء المساحة المثالية لمنازلهم.

السلوكيات الرئيسية:
- كن أنيقاً ومطلعاً على التصميم
- ناقش المواد والحرفية وفلسفة التصميم
- اقترح عناصر مكملة ومظهراً متكاملاً
- قدم معلومات الأسعار والتوصيل
- اجعل الردود أنيقة وموجزة";

const CAFE_EN: &str = "You are a friendly host at {name}, a welcoming café. \
You help guests explore the menu, make recommendations based on their preferences, and take reservations.

Key behaviors:
- Be warm, welcoming, and conversational
- Share enthusiasm about signature dishes and drinks
- Ask about dietary preferences and allergies
- Recommend daily specials and popular items
- Keep a casual, friendly tone";

const CAFE_AR: &str = "أنت مضيف ودود في {name}، مقهى ترحيبي. \
تساعد الضيوف في استكشاف القائمة وتقديم التوصيات بناءً على تفضيلاتهم وإجراء الحجوزات.

السلوكيات الرئيسية:
- كن دافئاً ومرحباً ومحادثاً
- شارك الحماس حول الأطباق والمشروبات المميزة
- اسأل عن التفضيلات الغذائية والحساسية
- أوصِ بالعروض اليومية والعناصر الشائعة
- حافظ على نبرة ودية غير رسمية";

const HOTEL_EN: &str = "You are a professional concierge at {name}, a luxury hotel. \
You help guests explore room options, amenities, and make bookings.

Key behaviors:
- Be professional, courteous, and attentive
- Describe room features and amenities in detail
- Help compare room types and pricing
- Answer questions about hotel services
- Maintain a refined, helpful demeanor";

const HOTEL_AR: &str = "أنت كونسيرج محترف في {name}، فندق فاخر. \
تساعد الضيوف في استكشاف خيارات الغرف ووسائل الراحة وإجراء الحجوزات.

السلوكيات الرئيسية:
- كن محترفاً ومهذباً ومنتبهاً
- صف ميزات الغرفة ووسائل الراحة بالتفصيل
- ساعد في مقارنة أنواع الغرف والأسعار
- أجب عن الأسئلة حول خدمات الفندق
- حافظ على سلوك راقٍ ومفيد";

const REAL_ESTATE_EN: &str = "You are a professional real estate agent showing {name}. \
You provide detailed information about the property, its features, location, and help potential buyers or renters make informed decisions.

Key behaviors:
- Be professional and knowledgeable
- Highlight key property features and benefits
- Discuss the neighborhood and local amenities
- Answer questions about pricing, financing, and terms
- Be honest about pros and cons";

const REAL_ESTATE_AR: &str = "أنت وكيل عقارات محترف تعرض {name}. \
تقدم معلومات مفصلة عن العقار وميزاته وموقعه وتساعد المشترين أو المستأجرين المحتملين في اتخاذ قرارات مستنيرة.

السلوكيات الرئيسية:
- كن محترفاً ومطلعاً
- أبرز الميزات والفوائد الرئيسية للعقار
- ناقش الحي والمرافق المحلية
- أجب عن الأسئلة حول التسعير والتمويل والشروط
- كن صادقاً بشأن الإيجابيات والسلبيات";

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tourchat_types::chat::{ChatRequest, SessionContext};

    use super::*;

    fn fridge() -> ItemKnowledge {
        ItemKnowledge::new(7, "Samsung Refrigerator")
            .with_category("Refrigerators")
            .with_price(18999.0, "EGP")
    }

    #[test]
    fn test_persona_uses_business_name_then_title() {
        let persona = PromptBuilder::build_persona(
            &DemoType::Hotel,
            "Demo Hotel",
            Some("The Nile Palace"),
            Locale::En,
            None,
        );
        assert!(persona.contains("concierge at The Nile Palace"));

        let persona =
            PromptBuilder::build_persona(&DemoType::Hotel, "Demo Hotel", None, Locale::En, None);
        assert!(persona.contains("concierge at Demo Hotel"));
    }

    #[test]
    fn test_persona_empty_title_falls_back_per_locale() {
        let en = PromptBuilder::build_persona(&DemoType::Cafe, "  ", None, Locale::En, None);
        assert!(en.contains("Virtual Tour"));
        let ar = PromptBuilder::build_persona(&DemoType::Cafe, "", None, Locale::Ar, None);
        assert!(ar.contains("الجولة الافتراضية"));
    }

    #[test]
    fn test_persona_unknown_type_uses_ecommerce() {
        let other = PromptBuilder::build_persona(
            &DemoType::Other("museum".to_string()),
            "Store",
            None,
            Locale::En,
            None,
        );
        let ecommerce =
            PromptBuilder::build_persona(&DemoType::Ecommerce, "Store", None, Locale::En, None);
        assert_eq!(other, ecommerce);
    }

    #[test]
    fn test_persona_location_sentence() {
        let persona = PromptBuilder::build_persona(
            &DemoType::RealEstate,
            "Villa",
            None,
            Locale::En,
            Some("Master bedroom"),
        );
        assert!(persona.ends_with("The user is currently viewing: Master bedroom."));

        let blank =
            PromptBuilder::build_persona(&DemoType::RealEstate, "Villa", None, Locale::En, Some(" "));
        assert!(!blank.contains("currently viewing"));
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        let block = PromptBuilder::build_catalog_block(&[], &DemoType::Ecommerce, Locale::En, 50);
        assert!(block.is_empty());
    }

    #[test]
    fn test_catalog_line_format() {
        let item = fridge().with_description("No-frost, 18 ft");
        assert_eq!(
            render_item_line(1, &item),
            "1. [ID:7] Samsung Refrigerator (Refrigerators) - EGP 18999 - No-frost, 18 ft"
        );
        assert_eq!(render_item_line(2, &ItemKnowledge::new(3, "Latte")), "2. [ID:3] Latte");
    }

    #[test]
    fn test_price_without_currency_uses_default() {
        let mut item = ItemKnowledge::new(4, "Oven");
        item.price = Some(4500.0);
        assert_eq!(render_item_line(1, &item), "1. [ID:4] Oven - EGP 4500");
    }

    #[test]
    fn test_description_truncated_to_limit() {
        let long = "x".repeat(150);
        let item = ItemKnowledge::new(1, "Sofa").with_description(long);
        let line = render_item_line(1, &item);
        let description = line.rsplit(" - ").next().unwrap();
        assert_eq!(description.chars().count(), 100);
    }

    #[test]
    fn test_specs_line_sorted_keys() {
        let mut extras = BTreeMap::new();
        extras.insert("color".to_string(), serde_json::json!("silver"));
        extras.insert("capacity".to_string(), serde_json::json!("18 ft"));
        let mut item = fridge();
        item.extras = Some(extras);

        let block =
            PromptBuilder::build_catalog_block(&[item], &DemoType::Ecommerce, Locale::En, 50);
        assert!(block.contains("\n   Specs: capacity: 18 ft, color: silver\n"));
    }

    #[test]
    fn test_block_contains_instructions_and_is_deterministic() {
        let catalog = vec![fridge(), ItemKnowledge::new(9, "LG Oven")];
        let a = PromptBuilder::build_catalog_block(&catalog, &DemoType::Ecommerce, Locale::Ar, 50);
        let b = PromptBuilder::build_catalog_block(&catalog, &DemoType::Ecommerce, Locale::Ar, 50);
        assert_eq!(a, b);
        assert!(a.contains("[[FLY_TO:<id>]]"));
        assert!(a.contains("2. [ID:9] LG Oven"));
    }

    #[test]
    fn test_block_caps_rendered_items() {
        let catalog: Vec<ItemKnowledge> = (1..=5)
            .map(|id| ItemKnowledge::new(id, format!("Item {id}")))
            .collect();
        let block =
            PromptBuilder::build_catalog_block(&catalog, &DemoType::Ecommerce, Locale::En, 3);
        assert!(block.contains("[ID:3]"));
        assert!(!block.contains("[ID:4]"));
        assert!(block.contains("(2 more items not listed)"));
    }

    #[test]
    fn test_system_prompt_joins_persona_and_block() {
        let request = ChatRequest {
            message: "hi".to_string(),
            demo_title: "Awni".to_string(),
            items: Some(vec![fridge()]),
            ..ChatRequest::default()
        };
        let context = SessionContext::from_request(&request);
        let prompt = PromptBuilder::build_system_prompt(&context, 50);
        assert!(prompt.starts_with("You are a friendly and knowledgeable shopping assistant for Awni"));
        assert!(prompt.contains("\n\nProducts in this store (1 total)"));

        let empty = SessionContext::from_request(&ChatRequest::default());
        let prompt = PromptBuilder::build_system_prompt(&empty, 50);
        assert!(!prompt.contains("[ID:"));
        assert!(!prompt.contains("FLY_TO"));
    }
}
