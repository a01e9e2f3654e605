//! Caption normalization.

use std::sync::LazyLock;

use regex::Regex;

static NON_CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^가-힣0-9.,!? ]+").expect("invalid caption charset regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Normalize a raw caption string.
///
/// Keeps Korean syllables, ASCII digits, `. , ! ?` and spaces; everything
/// else is deleted. Runs of whitespace collapse to a single space and the
/// result is trimmed. Charset stripping happens before whitespace collapsing,
/// so tabs and newlines are deleted rather than turned into spaces.
///
/// Pure and idempotent; any input (including empty) yields a valid output.
///
/// # Example
///
/// ```
/// use leyenda::text::normalize_caption;
///
/// assert_eq!(normalize_caption("  바다가   보인다! (really)  "), "바다가 보인다!");
/// ```
pub fn normalize_caption(text: &str) -> String {
    let stripped = NON_CAPTION.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_korean_digits_punctuation() {
        assert_eq!(normalize_caption("고양이 2마리가 있다."), "고양이 2마리가 있다.");
        assert_eq!(normalize_caption("정말, 멋지다!?"), "정말, 멋지다!?");
    }

    #[test]
    fn test_strips_latin_and_symbols() {
        assert_eq!(normalize_caption("hello 안녕 world"), "안녕");
        assert_eq!(normalize_caption("사진 #42 @집"), "사진 42 집");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(normalize_caption("  나무가    많다  "), "나무가 많다");
    }

    #[test]
    fn test_tabs_and_newlines_are_deleted_not_spaced() {
        // The charset strip removes \t and \n before collapsing, so no space
        // is introduced between the joined words.
        assert_eq!(normalize_caption("강\t아지"), "강아지");
        assert_eq!(normalize_caption("하늘\n바다"), "하늘바다");
    }

    #[test]
    fn test_empty_and_all_stripped() {
        assert_eq!(normalize_caption(""), "");
        assert_eq!(normalize_caption("ABC xyz --- "), "");
    }

    #[test]
    fn test_korean_jamo_outside_syllable_block_removed() {
        // ㅋ is a compatibility jamo, not in the 가-힣 syllable range.
        assert_eq!(normalize_caption("ㅋㅋ 웃긴다"), "웃긴다");
    }
}
