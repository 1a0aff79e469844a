//! Bilingual keyword tables and the boundary-aware matchers that read them.
//!
//! English terms match on word boundaries. Arabic terms may carry a leading
//! clitic (`و`, `ب`, `ال`, ...) and, when three letters or longer, a trailing
//! suffix, so `بالثلاجة` still matches `ثلاجة`.

use tourchat_types::catalog::DemoType;

pub(crate) const NAV_VERBS: &[&str] = &[
    "see", "show", "take", "go", "navigate", "fly", "view", "visit", "bring", "move", "teleport",
    "look", "where", "أرني", "ارني", "ورني", "وريني", "خذني", "وديني", "ودني", "روح", "انتقل",
    "اعرض", "شوف", "أشوف", "اشوف", "فين", "وين", "أين", "اين",
];

pub(crate) const DEICTICS: &[&str] = &[
    "this", "it", "that", "there", "them", "one", "هذا", "هذه", "هذي", "هاد", "ذلك", "هناك", "هو",
    "هي",
];

pub(crate) const PRICE_WORDS: &[&str] = &[
    "price", "prices", "cost", "how much", "expensive", "cheap", "afford", "budget", "سعر",
    "أسعار", "اسعار", "بكم", "ثمن", "تكلفة", "قيمة", "غالي", "رخيص", "كم",
];

pub(crate) const AFFIRMATIVES: &[&str] = &[
    "yes", "yeah", "yep", "sure", "okay", "ok", "alright", "please", "go ahead", "of course",
    "نعم", "أيوه", "ايوه", "طيب", "تمام", "ماشي", "موافق", "أكيد", "اكيد", "يلا", "اوك",
];

pub(crate) const TOUR_WORDS: &[&str] = &[
    "around", "tour", "explore", "walk", "anywhere", "somewhere", "جولة", "جوله", "تجول", "لفة",
];

/// Words that never identify an item on their own.
const STOP_WORDS: &[&str] = &[
    // navigation and deixis
    "show", "see", "take", "navigate", "fly", "view", "visit", "bring", "move", "look", "where",
    "this", "that", "there", "them", "one", "around", "tour", "explore", "walk",
    // price
    "price", "prices", "cost", "how", "much", "many", "expensive", "cheap", "budget",
    // affirmatives and courtesy
    "yes", "yeah", "yep", "sure", "okay", "alright", "please", "thanks", "thank", "hello",
    // filler
    "the", "and", "for", "you", "your", "have", "has", "had", "what", "which", "who", "does",
    "did", "with", "about", "tell", "want", "need", "like", "can", "could", "would", "should",
    "let", "lets", "get", "give", "any", "are", "was", "were", "its", "some", "more", "info",
    "information", "details", "find", "looking", "search", "available", "from", "into", "all",
    "something", "anything", "our", "this", "these", "those", "there", "here", "now", "also",
    "just", "really", "very", "item", "items", "product", "products",
    // Arabic
    "أرني", "ارني", "ورني", "وريني", "خذني", "وديني", "ودني", "روح", "انتقل", "اعرض", "شوف",
    "أشوف", "اشوف", "فين", "وين", "أين", "اين", "هذا", "هذه", "هذي", "هاد", "ذلك", "هناك", "سعر",
    "بكم", "ثمن", "تكلفة", "قيمة", "نعم", "أيوه", "ايوه", "طيب", "تمام", "ماشي", "موافق", "أكيد",
    "اكيد", "يلا", "عن", "في", "من", "على", "إلى", "الى", "ابي", "أبي", "أبغى", "ابغى", "عايز",
    "أريد", "اريد", "ممكن", "لو", "سمحت", "هل", "عندكم", "عندك", "شو", "وش", "ايش", "إيش", "ماذا",
    "جولة", "جوله", "منتجات", "المنتجات", "مرحبا", "شكرا",
];

const ARABIC_PREFIXES: &[&str] = &[
    "", "و", "ب", "ل", "ف", "ك", "ال", "وال", "بال", "لل", "فال", "كال", "وب", "ول",
];

/// One row of a demo type's category table.
#[derive(Debug)]
pub(crate) struct CategoryEntry {
    pub label_en: &'static str,
    pub label_ar: &'static str,
    pub keywords: &'static [&'static str],
}

const ECOMMERCE_CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        label_en: "refrigerators",
        label_ar: "الثلاجات",
        keywords: &["refrigerator", "fridge", "freezer", "ثلاجة", "ثلاجات", "تلاجة", "فريزر"],
    },
    CategoryEntry {
        label_en: "dishwashers",
        label_ar: "غسالات الصحون",
        keywords: &["dishwasher", "جلاية", "غسالة صحون"],
    },
    CategoryEntry {
        label_en: "washing machines",
        label_ar: "الغسالات",
        keywords: &["washing machine", "washer", "dryer", "غسالة", "غسالات", "نشافة"],
    },
    CategoryEntry {
        label_en: "ovens and cookers",
        label_ar: "الأفران والبوتاجازات",
        keywords: &["oven", "cooker", "stove", "فرن", "أفران", "افران", "بوتاجاز", "طباخ"],
    },
    CategoryEntry {
        label_en: "TVs",
        label_ar: "الشاشات",
        keywords: &["tv", "tvs", "television", "screen", "تلفزيون", "تلفاز", "شاشة", "شاشات"],
    },
    CategoryEntry {
        label_en: "air conditioners",
        label_ar: "المكيفات",
        keywords: &["air conditioner", "ac", "مكيف", "مكيفات", "تكييف"],
    },
    CategoryEntry {
        label_en: "microwaves",
        label_ar: "الميكروويف",
        keywords: &["microwave", "مايكرويف", "ميكروويف"],
    },
];

const SHOWROOM_CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        label_en: "sofas",
        label_ar: "الكنب",
        keywords: &["sofa", "couch", "sectional", "كنبة", "كنب", "أريكة", "اريكة"],
    },
    CategoryEntry {
        label_en: "beds",
        label_ar: "السراير",
        keywords: &["bed", "beds", "mattress", "سرير", "سراير", "مرتبة"],
    },
    CategoryEntry {
        label_en: "tables",
        label_ar: "الطاولات",
        keywords: &["table", "desk", "طاولة", "طاولات", "ترابيزة", "مكتب"],
    },
    CategoryEntry {
        label_en: "chairs",
        label_ar: "الكراسي",
        keywords: &["chair", "armchair", "stool", "كرسي", "كراسي"],
    },
    CategoryEntry {
        label_en: "lighting",
        label_ar: "الإضاءة",
        keywords: &["lamp", "light", "chandelier", "إضاءة", "اضاءة", "أباجورة", "نجفة"],
    },
    CategoryEntry {
        label_en: "storage",
        label_ar: "الخزائن",
        keywords: &["wardrobe", "cabinet", "shelf", "dresser", "دولاب", "خزانة", "رف"],
    },
];

const CAFE_CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        label_en: "coffee",
        label_ar: "القهوة",
        keywords: &[
            "coffee", "espresso", "latte", "cappuccino", "americano", "mocha", "قهوة", "اسبريسو",
            "لاتيه", "كابتشينو",
        ],
    },
    CategoryEntry {
        label_en: "tea",
        label_ar: "الشاي",
        keywords: &["tea", "شاي"],
    },
    CategoryEntry {
        label_en: "desserts",
        label_ar: "الحلويات",
        keywords: &["dessert", "cake", "cookie", "brownie", "sweet", "حلويات", "كيك", "حلى"],
    },
    CategoryEntry {
        label_en: "breakfast",
        label_ar: "الفطور",
        keywords: &["breakfast", "sandwich", "croissant", "فطور", "سندويش", "كرواسون"],
    },
    CategoryEntry {
        label_en: "cold drinks",
        label_ar: "المشروبات الباردة",
        keywords: &["juice", "smoothie", "iced", "cold drink", "عصير", "سموذي", "مثلج"],
    },
];

const HOTEL_CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        label_en: "rooms and suites",
        label_ar: "الغرف والأجنحة",
        keywords: &["room", "suite", "غرفة", "غرف", "جناح", "أجنحة"],
    },
    CategoryEntry {
        label_en: "dining",
        label_ar: "المطاعم",
        keywords: &["restaurant", "dining", "breakfast", "dinner", "مطعم", "مطاعم", "إفطار"],
    },
    CategoryEntry {
        label_en: "pools",
        label_ar: "المسابح",
        keywords: &["pool", "swimming", "مسبح", "حمام سباحة"],
    },
    CategoryEntry {
        label_en: "spa and fitness",
        label_ar: "السبا واللياقة",
        keywords: &["spa", "gym", "fitness", "massage", "سبا", "جيم", "مساج"],
    },
    CategoryEntry {
        label_en: "meeting spaces",
        label_ar: "قاعات الاجتماعات",
        keywords: &["meeting", "conference", "ballroom", "event", "قاعة", "مؤتمرات", "اجتماعات"],
    },
];

const REAL_ESTATE_CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        label_en: "bedrooms",
        label_ar: "غرف النوم",
        keywords: &["bedroom", "master", "غرفة نوم", "غرف نوم"],
    },
    CategoryEntry {
        label_en: "kitchens",
        label_ar: "المطابخ",
        keywords: &["kitchen", "مطبخ"],
    },
    CategoryEntry {
        label_en: "bathrooms",
        label_ar: "الحمامات",
        keywords: &["bathroom", "toilet", "حمام", "حمامات"],
    },
    CategoryEntry {
        label_en: "living areas",
        label_ar: "مناطق المعيشة",
        keywords: &["living", "lounge", "reception", "salon", "صالة", "ريسبشن", "معيشة"],
    },
    CategoryEntry {
        label_en: "outdoor spaces",
        label_ar: "المساحات الخارجية",
        keywords: &["garden", "balcony", "terrace", "roof", "حديقة", "بلكونة", "تراس", "روف"],
    },
];

/// Category table for a demo type; unknown types use the ecommerce table.
pub(crate) fn categories_for(demo_type: &DemoType) -> &'static [CategoryEntry] {
    match demo_type {
        DemoType::Showroom => SHOWROOM_CATEGORIES,
        DemoType::Cafe => CAFE_CATEGORIES,
        DemoType::Hotel => HOTEL_CATEGORIES,
        DemoType::RealEstate => REAL_ESTATE_CATEGORIES,
        DemoType::Ecommerce | DemoType::Other(_) => ECOMMERCE_CATEGORIES,
    }
}

/// True for characters in the Arabic block (U+0600..=U+06FF).
pub(crate) fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

pub(crate) fn has_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn left_boundary(text: &str, start: usize, arabic: bool) -> bool {
    let run: String = {
        let mut chars: Vec<char> = text[..start]
            .chars()
            .rev()
            .take_while(|c| is_word_char(*c))
            .collect();
        chars.reverse();
        chars.into_iter().collect()
    };
    if arabic {
        ARABIC_PREFIXES.contains(&run.as_str())
    } else {
        run.is_empty()
    }
}

fn right_boundary(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_none_or(|c| !is_word_char(c))
}

/// Whole-word match (Arabic terms tolerate clitics and suffixes).
pub(crate) fn contains_word(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let arabic = has_arabic(term);
    let open_suffix = arabic && term.chars().count() >= 3;
    text.match_indices(term).any(|(start, _)| {
        left_boundary(text, start, arabic)
            && (open_suffix || right_boundary(text, start + term.len()))
    })
}

/// Substring match of a category keyword, so `fridge` finds `minifridge`.
/// Very short ASCII keywords (`tv`, `ac`, `tea`) stay whole-word.
///
/// Substring matching lets `washer` find `dishwasher`; the dishwasher row
/// sits first in its table so the more specific category wins.
pub(crate) fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_ascii() && keyword.len() <= 3 {
        return contains_word(text, keyword);
    }
    !keyword.is_empty() && text.contains(keyword)
}

pub(crate) fn contains_any_word(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_word(text, term))
}

/// Content terms of a message: lowercase, at least three characters, not a
/// stop word. A leading `ال` is dropped from longer Arabic tokens.
pub(crate) fn content_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut terms = Vec::new();
    for raw in lowered.split(|c: char| !is_word_char(c)) {
        if raw.chars().count() < 3 || STOP_WORDS.contains(&raw) {
            continue;
        }
        let token = match raw.strip_prefix("ال") {
            Some(rest) if rest.chars().count() >= 3 => rest,
            _ => raw,
        };
        if STOP_WORDS.contains(&token) {
            continue;
        }
        if !terms.iter().any(|t: &String| t == token) {
            terms.push(token.to_string());
        }
    }
    terms
}

/// Substring match of a content term against an item's search text,
/// accepting a plural English term against a singular name.
pub(crate) fn term_matches(haystack: &str, term: &str) -> bool {
    if haystack.contains(term) {
        return true;
    }
    term.len() > 3 && term.is_ascii() && term.ends_with('s') && haystack.contains(&term[..term.len() - 1])
}
