// crates/guide-core/src/text.rs

//! # Text helpers
//!
//! Canonical tokens for place-name comparison plus the small string
//! utilities the presentation helpers share.

/// Convert a free-text place name into a comparable canonical token.
///
/// Steps:
/// 1) Transliterate Unicode to ASCII with `deunicode`. Diacritics are
///    dropped (`Bragança` -> `Braganca`) and other letters are spelled out
///    (`ß` -> `ss`, `ø` -> `o`, CJK to pinyin), so the output is always ASCII
/// 2) Lowercase
/// 3) Replace every run of whitespace with a single `-`
///
/// Total and idempotent: the output is ASCII without whitespace, so a
/// second pass leaves it unchanged. Empty in, empty out.
///
/// # Examples
///
/// ```rust
/// use guide_core::text::normalize_name;
///
/// assert_eq!(normalize_name("Viana do Castelo"), "viana-do-castelo");
/// assert_eq!(normalize_name("Bragança"), "braganca");
/// assert_eq!(normalize_name("Belém  District"), "belem-district");
/// assert_eq!(normalize_name(""), "");
/// ```
pub fn normalize_name(raw: &str) -> String {
    hyphenate_whitespace(&deunicode::deunicode(raw).to_lowercase())
}

/// Lowercase and hyphenate without folding diacritics.
///
/// This is the token the slug fallback of the district resolver compares
/// against stored slugs, so `"Vila Real"` becomes `"vila-real"` while
/// `"Évora"` stays `"évora"`.
pub fn slug_token(raw: &str) -> String {
    hyphenate_whitespace(&raw.to_lowercase())
}

fn hyphenate_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Compares two names after [`normalize_name`].
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Uppercases the first character, leaves the rest untouched.
///
/// Category keys such as `"general"` are shown as `"General"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a paragraph into sentences for bullet lists.
///
/// A sentence ends at a `.` followed by whitespace or the end of the text.
/// Empty pieces are dropped and every sentence comes back trimmed and
/// terminated with a period.
///
/// ```rust
/// use guide_core::text::split_sentences;
///
/// let points = split_sentences("Trains connect major cities. Buses serve smaller towns.");
/// assert_eq!(points, vec!["Trains connect major cities.", "Buses serve smaller towns."]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let ends_sentence = ch == '.' && chars.peek().map_or(true, |next| next.is_whitespace());
        if ends_sentence {
            if let Some(next) = chars.peek() {
                if next.is_whitespace() {
                    chars.next();
                }
            }
            push_sentence(&mut out, &current);
            current.clear();
        } else {
            current.push(ch);
        }
    }
    push_sentence(&mut out, &current);
    out
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    if trimmed.ends_with('.') {
        out.push(trimmed.to_string());
    } else {
        out.push(format!("{trimmed}."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_portuguese_diacritics() {
        assert_eq!(normalize_name("Setúbal"), "setubal");
        assert_eq!(normalize_name("Santarém"), "santarem");
        assert_eq!(normalize_name("São Jorge"), "sao-jorge");
    }

    #[test]
    fn normalize_transliterates_beyond_diacritics() {
        assert_eq!(normalize_name("Straße"), "strasse");
        assert_eq!(normalize_name("Søndre"), "sondre");
        assert!(normalize_name("北京市").is_ascii());
    }

    #[test]
    fn normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_name("Castelo \t Branco"), "castelo-branco");
        assert_eq!(normalize_name(" Porto "), "-porto-");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "Bragança",
            "  Vila   Real ",
            "Belém District",
            "ÉVORA",
            "Straße\u{00a0}Nord",
            "Łódź",
            "北京市",
            "tab\tand\nnewline",
        ];
        for s in samples {
            let once = normalize_name(s);
            assert_eq!(normalize_name(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn slug_token_keeps_diacritics() {
        assert_eq!(slug_token("Vila Real"), "vila-real");
        assert_eq!(slug_token("Évora"), "évora");
    }

    #[test]
    fn equals_normalized_ignores_case_and_accents() {
        assert!(equals_normalized("BRAGANÇA", "braganca"));
        assert!(!equals_normalized("Braga", "Bragança"));
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize("general"), "General");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn split_sentences_keeps_decimal_points() {
        let points = split_sentences("230V, 50Hz with Type F plugs. Version 2.5 is fine.");
        assert_eq!(points, vec!["230V, 50Hz with Type F plugs.", "Version 2.5 is fine."]);
    }

    #[test]
    fn split_sentences_terminates_last_piece() {
        assert_eq!(split_sentences("No trailing period"), vec!["No trailing period."]);
        assert!(split_sentences("  ").is_empty());
    }
}
