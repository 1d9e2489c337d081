//! Part-of-speech handling.
//!
//! Source entries use an open vocabulary. The Windows IME importer accepts
//! only a fixed set of classes, so [`normalize_for_windows`] folds every tag
//! into that set.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Part of speech assumed for entries that do not declare one.
pub const DEFAULT_PART_OF_SPEECH: &str = "名詞";

lazy_static! {
    static ref WINDOWS_POS_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("記号", "短縮よみ"),
        ("名詞", "名詞"),
        ("動詞", "名詞"),
        ("形容詞", "名詞"),
        ("副詞", "名詞"),
        ("人名", "人名"),
        ("地名", "地名"),
        ("固有名詞", "名詞"),
        ("短縮よみ", "短縮よみ"),
        ("顔文字", "顔文字"),
        ("サ変名詞", "サ変名詞"),
    ]);
}

/// Map a source part-of-speech tag to one the Windows IME accepts.
///
/// Matching is exact. Unknown tags, including the empty string, become
/// [`DEFAULT_PART_OF_SPEECH`].
pub fn normalize_for_windows(pos: &str) -> &'static str {
    WINDOWS_POS_MAP
        .get(pos)
        .copied()
        .unwrap_or(DEFAULT_PART_OF_SPEECH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let expected = [
            ("記号", "短縮よみ"),
            ("名詞", "名詞"),
            ("動詞", "名詞"),
            ("形容詞", "名詞"),
            ("副詞", "名詞"),
            ("人名", "人名"),
            ("地名", "地名"),
            ("固有名詞", "名詞"),
            ("短縮よみ", "短縮よみ"),
            ("顔文字", "顔文字"),
            ("サ変名詞", "サ変名詞"),
        ];
        for (input, output) in expected {
            assert_eq!(normalize_for_windows(input), output, "input {input}");
        }
    }

    #[test]
    fn test_unknown_tags_fold_to_noun() {
        assert_eq!(normalize_for_windows("未定義品詞"), "名詞");
        assert_eq!(normalize_for_windows(""), "名詞");
        assert_eq!(normalize_for_windows("noun"), "名詞");
    }

    #[test]
    fn test_matching_is_exact() {
        assert_eq!(normalize_for_windows(" 記号"), "名詞");
        assert_eq!(normalize_for_windows("記号 "), "名詞");
    }
}
