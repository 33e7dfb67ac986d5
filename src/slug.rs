use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derive a URL-safe slug from a tag title.
///
/// "São Paulo" -> "sao-paulo". Applying it to its own output changes nothing.
pub fn derive_slug(title: &str) -> String {
    let decomposed: String = title.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let stripped = NON_SLUG_CHARS.replace_all(&decomposed, "");
    WHITESPACE_RUNS
        .replace_all(stripped.trim(), "-")
        .to_lowercase()
}
