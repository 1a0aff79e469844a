//! Bilingual reply templates for the local engine.

use tourchat_types::catalog::{ItemKnowledge, Locale};

use crate::assistant::navigation::encode;

const MAX_LISTED: usize = 4;
const MAX_PRICED: usize = 3;

fn names(items: &[&ItemKnowledge], limit: usize, locale: Locale) -> String {
    let listed: Vec<&str> = items.iter().take(limit).map(|i| i.name.as_str()).collect();
    match locale {
        Locale::En => listed.join(", "),
        Locale::Ar => listed.join("، "),
    }
}

fn price_suffix(item: &ItemKnowledge, locale: Locale) -> String {
    match (item.price_label(), locale) {
        (Some(price), Locale::En) => format!(" at {price}"),
        (Some(price), Locale::Ar) => format!(" بسعر {price}"),
        (None, _) => String::new(),
    }
}

fn go_there(item: &ItemKnowledge, navigate: bool, locale: Locale) -> String {
    match (navigate, locale) {
        (true, Locale::En) => format!(" Taking you there now! {}", encode(item.id)),
        (true, Locale::Ar) => format!(" سأنقلك إليه الآن! {}", encode(item.id)),
        (false, Locale::En) => " Would you like me to take you there?".to_string(),
        (false, Locale::Ar) => " هل تريد أن أنقلك إليه؟".to_string(),
    }
}

pub(crate) fn navigate_to_reference(item: &ItemKnowledge, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Sure! Taking you to the {} now. {}", item.name, encode(item.id)),
        Locale::Ar => format!("بكل سرور! سأنقلك إلى {} الآن. {}", item.name, encode(item.id)),
    }
}

pub(crate) fn category_matches(
    label: &str,
    matches: &[&ItemKnowledge],
    navigate: bool,
    locale: Locale,
) -> String {
    let Some(featured) = matches.first() else {
        return String::new();
    };
    let count = matches.len();
    let body = match (count, locale) {
        (1, Locale::En) => format!(
            "We have 1 option in {label}: the {}{}.",
            featured.name,
            price_suffix(featured, locale)
        ),
        (_, Locale::En) => format!(
            "We have {count} options in {label}: {}. The {} is a great pick{}.",
            names(matches, MAX_LISTED, locale),
            featured.name,
            price_suffix(featured, locale)
        ),
        (1, Locale::Ar) => format!(
            "لدينا خيار واحد في {label}: {}{}.",
            featured.name,
            price_suffix(featured, locale)
        ),
        (_, Locale::Ar) => format!(
            "لدينا {count} خيارات في {label}: {}. أنصحك بـ {}{}.",
            names(matches, MAX_LISTED, locale),
            featured.name,
            price_suffix(featured, locale)
        ),
    };
    format!("{body}{}", go_there(featured, navigate, locale))
}

pub(crate) fn single_name_match(item: &ItemKnowledge, navigate: bool, locale: Locale) -> String {
    let body = match locale {
        Locale::En => format!("The {} is available{}.", item.name, price_suffix(item, locale)),
        Locale::Ar => format!("{} متوفر{}.", item.name, price_suffix(item, locale)),
    };
    format!("{body}{}", go_there(item, navigate, locale))
}

pub(crate) fn several_name_matches(matches: &[&ItemKnowledge], locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "I found several matches: {}. Which one would you like to know more about?",
            names(matches, MAX_LISTED, locale)
        ),
        Locale::Ar => format!(
            "وجدت عدة خيارات: {}. أي واحد تريد أن تعرف عنه أكثر؟",
            names(matches, MAX_LISTED, locale)
        ),
    }
}

pub(crate) fn item_price(item: &ItemKnowledge, price: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "The {} is priced at {price}. Would you like me to take you to it?",
            item.name
        ),
        Locale::Ar => format!("سعر {} هو {price}. هل تريد أن أنقلك إليه؟", item.name),
    }
}

pub(crate) fn price_list(priced: &[&ItemKnowledge], locale: Locale) -> String {
    let entries: Vec<String> = priced
        .iter()
        .take(MAX_PRICED)
        .filter_map(|item| item.price_label().map(|p| format!("{} - {p}", item.name)))
        .collect();
    match locale {
        Locale::En => format!(
            "Here are some of our prices: {}. Which one interests you?",
            entries.join("; ")
        ),
        Locale::Ar => format!("إليك بعض أسعارنا: {}. أي منها يهمك؟", entries.join("؛ ")),
    }
}

pub(crate) fn pricing_help(locale: Locale) -> String {
    match locale {
        Locale::En => {
            "I can help you with pricing! Which product would you like to know about?".to_string()
        }
        Locale::Ar => {
            "يمكنني مساعدتك في معرفة الأسعار! ما المنتج الذي تريد الاستفسار عنه؟".to_string()
        }
    }
}

pub(crate) fn confirmation(item: &ItemKnowledge, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Great! Taking you to the {} now. {}", item.name, encode(item.id)),
        Locale::Ar => format!("ممتاز! سأنقلك إلى {} الآن. {}", item.name, encode(item.id)),
    }
}

pub(crate) fn start_tour(item: &ItemKnowledge, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Let's start with the {}. Taking you there now! {}",
            item.name,
            encode(item.id)
        ),
        Locale::Ar => format!("لنبدأ بـ {}. سأنقلك إليه الآن! {}", item.name, encode(item.id)),
    }
}

pub(crate) fn overview(catalog: &[ItemKnowledge], locale: Locale) -> String {
    let refs: Vec<&ItemKnowledge> = catalog.iter().collect();
    match (catalog.len(), locale) {
        (0, Locale::En) => {
            "I can guide you around this virtual tour. Ask me anything about what you see!"
                .to_string()
        }
        (0, Locale::Ar) => "يمكنني إرشادك في هذه الجولة الافتراضية. اسألني عن أي شيء تراه!".to_string(),
        (n, Locale::En) => format!(
            "This tour has {n} items to explore, including {}. Ask me about any of them, or say \"take me to\" and a name.",
            names(&refs, MAX_PRICED, locale)
        ),
        (n, Locale::Ar) => format!(
            "تضم هذه الجولة {n} عناصر، منها {}. اسألني عن أي منها أو قل \"خذني إلى\" واسم العنصر.",
            names(&refs, MAX_PRICED, locale)
        ),
    }
}

pub(crate) fn help(catalog_len: usize, locale: Locale) -> String {
    match (catalog_len, locale) {
        (0, Locale::En) => "Of course! I'm here to help. What would you like to know?".to_string(),
        (0, Locale::Ar) => "بالطبع! أنا هنا للمساعدة. كيف يمكنني مساعدتك اليوم؟".to_string(),
        (n, Locale::En) => format!(
            "I'm here to help! I can tell you about the {n} items in this tour and take you straight to any of them. What are you looking for?"
        ),
        (n, Locale::Ar) => format!(
            "أنا هنا للمساعدة! يمكنني إخبارك عن {n} عناصر في هذه الجولة ونقلك مباشرة إلى أي منها. عن ماذا تبحث؟"
        ),
    }
}

pub(crate) fn greeting(catalog_len: usize, locale: Locale) -> String {
    match (catalog_len, locale) {
        (0, Locale::En) => "Hello! How can I assist you with your virtual tour today?".to_string(),
        (0, Locale::Ar) => "مرحباً بك! كيف يمكنني مساعدتك في جولتك الافتراضية اليوم؟".to_string(),
        (n, Locale::En) => format!(
            "Hello! Welcome to the virtual tour. There are {n} items to explore here. What are you looking for?"
        ),
        (n, Locale::Ar) => format!(
            "مرحباً بك في الجولة الافتراضية! هناك {n} عناصر يمكنك استكشافها. عن ماذا تبحث؟"
        ),
    }
}

pub(crate) fn thanks(locale: Locale) -> String {
    match locale {
        Locale::En => "You're welcome! Enjoy the rest of the tour.".to_string(),
        Locale::Ar => "على الرحب والسعة! استمتع ببقية الجولة.".to_string(),
    }
}

pub(crate) fn fallback(catalog: &[ItemKnowledge], locale: Locale) -> String {
    match (catalog.first(), locale) {
        (None, Locale::En) => "Thanks for your message! How can I help you today?".to_string(),
        (None, Locale::Ar) => "شكراً لرسالتك! كيف يمكنني مساعدتك اليوم؟".to_string(),
        (Some(first), Locale::En) => format!(
            "I'm not sure I caught that. You can ask about any of our {} items by name or category, for example \"{}\".",
            catalog.len(),
            first.name
        ),
        (Some(first), Locale::Ar) => format!(
            "لم أفهم طلبك تماماً. يمكنك السؤال عن أي من {} عناصر بالاسم أو الفئة، مثلاً \"{}\".",
            catalog.len(),
            first.name
        ),
    }
}

/// Used when a provider reply is nothing but a sentinel.
pub fn navigation_only(item_name: Option<&str>, locale: Locale) -> String {
    match (item_name, locale) {
        (Some(name), Locale::En) => format!("Taking you to {name}."),
        (Some(name), Locale::Ar) => format!("سأنقلك إلى {name}."),
        (None, Locale::En) => "How else can I help you with the tour?".to_string(),
        (None, Locale::Ar) => "كيف يمكنني مساعدتك أكثر في الجولة؟".to_string(),
    }
}
