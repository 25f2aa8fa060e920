//! Hashtag suggestion use case

use std::collections::HashSet;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Generic tags used to fill the slots caption words leave open
pub const FALLBACK_HASHTAGS: [&str; 10] = [
    "#photography",
    "#instagood",
    "#creativelife",
    "#behindthescenes",
    "#contentcreator",
    "#reels",
    "#camera",
    "#studio",
    "#lightroom",
    "#capturethemoment",
];

/// Words must be longer than this to become candidate tags
const MIN_WORD_LEN: usize = 4;

const STRIP_CHARS: &[char] = &[
    '.', ',', '!', '?', ':', ';', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Suggest up to `max_tags` unique hashtags for a caption.
///
/// Long alphabetic caption words come first, in the order they appear,
/// followed by [`FALLBACK_HASHTAGS`]. Duplicates are dropped by exact string
/// comparison.
pub fn suggest_hashtags(caption: &str, max_tags: usize) -> Vec<String> {
    if max_tags == 0 {
        return Vec::new();
    }

    let candidates = caption_candidates(caption);
    let fallback = FALLBACK_HASHTAGS.iter().map(|t| t.to_string());

    let mut seen = HashSet::new();
    let mut tags = Vec::with_capacity(max_tags.min(candidates.len() + FALLBACK_HASHTAGS.len()));

    for tag in candidates.into_iter().chain(fallback) {
        if tags.len() >= max_tags {
            break;
        }
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }

    tracing::debug!(requested = max_tags, returned = tags.len(), "Suggested hashtags");

    tags
}

/// Candidate tags mined from the caption, in order of appearance
fn caption_candidates(caption: &str) -> Vec<String> {
    caption
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(STRIP_CHARS))
        .filter(|word| is_candidate_word(word))
        .map(|word| format!("#{}", word))
        .collect()
}

fn is_candidate_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_letter) && word.chars().count() > MIN_WORD_LEN
}

/// Letters only (Lu, Ll, Lt, Lm, Lo); letter-like numbers and vowel signs are not
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
