//! Caption templating use case

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::model::CaptionRequest;

const SCENE_PHRASE: &str = " — behind the scenes";
const SIGN_OFF: &str = ". Crafted with passion, captured with intention.";

/// Build a caption from a topic plus optional tone, audience and keywords.
///
/// The result is deterministic: the title-cased topic, a fixed scene phrase,
/// the optional tone and audience clauses, a fixed sign-off and finally the
/// keywords as space-joined hashtags in their original order.
pub fn compose_caption(request: &CaptionRequest) -> String {
    let mut caption = title_case(&request.topic);
    caption.push_str(SCENE_PHRASE);

    if let Some(tone) = non_empty(request.tone.as_deref()) {
        caption.push_str(&format!(" in a {} tone", tone));
    }

    if let Some(audience) = non_empty(request.audience.as_deref()) {
        caption.push_str(&format!(" for {}", audience));
    }

    caption.push_str(SIGN_OFF);

    let keywords = request.keywords.as_deref().unwrap_or_default();
    if !keywords.is_empty() {
        let tags: Vec<String> = keywords.iter().map(|k| keyword_hashtag(k)).collect();
        caption.push(' ');
        caption.push_str(&tags.join(" "));
    }

    caption.trim().to_string()
}

/// Title-case text the way Python's `str.title()` does.
///
/// A character starts a word when the one before it is not cased. Word starts
/// get their titlecase form, every other cased character is lower-cased.
/// "sunset shoot" becomes "Sunset Shoot", "ßig" becomes "Ssig".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_cased = false;

    for c in text.chars() {
        if previous_is_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        previous_is_cased = is_cased(c);
    }

    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase()
        || c.is_uppercase()
        || get_general_category(c) == GeneralCategory::TitlecaseLetter
}

/// Append the titlecase mapping of `c`
fn push_titlecase(out: &mut String, c: char) {
    let titled = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        // Greek with ypogegrammeni titlecases to prosgegrammeni
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => char::from_u32(c as u32 + 9),
        _ if get_general_category(c) == GeneralCategory::TitlecaseLetter => Some(c),
        _ => None,
    };

    if let Some(titled) = titled {
        out.push(titled);
        return;
    }

    if c == '\u{0149}' {
        out.push_str("\u{02BC}N");
        return;
    }

    // Multi-char upper-case expansions keep only their first letter upper-cased
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
        out.extend(upper.flat_map(char::to_lowercase));
    }
}

/// Turn a keyword into a hashtag token: spaces removed, '#' prefixed
fn keyword_hashtag(keyword: &str) -> String {
    format!("#{}", keyword.replace(' ', ""))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
