use serde::{Deserialize, Serialize};

/// One kana character (or word) from the bundled word list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordItem {
    pub hiragana: String,
    /// Katakana form.
    pub kana: String,
    /// Expected romaji answer.
    pub roma: String,
    pub kanji: String,
}

impl WordItem {
    pub fn glyph(&self, script: Script) -> &str {
        match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.kana,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VocabDetail {
    #[serde(default)]
    pub kanji: Option<String>,
    #[serde(default)]
    pub eng: Option<String>,
    #[serde(default)]
    pub vni: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub example_vni: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabItem {
    pub key: String,
    pub detail: VocabDetail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Hiragana,
    Katakana,
}

impl Script {
    pub fn toggled(self) -> Self {
        match self {
            Script::Hiragana => Script::Katakana,
            Script::Katakana => Script::Hiragana,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }
}

/// Transient message shown under the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Retry,
    Completed,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Retry => "Wrong! Try again.",
            Feedback::Completed => "Completed! No more characters to practise.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Drill,
    Quiz,
    QuizSummary,
    Vocab,
}

/// Compares a typed answer to the expected romaji: surrounding whitespace is
/// ignored and the comparison is case-insensitive.
pub fn is_correct_answer(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_a() -> WordItem {
        WordItem {
            hiragana: "あ".to_string(),
            kana: "ア".to_string(),
            roma: "a".to_string(),
            kanji: "安".to_string(),
        }
    }

    #[test]
    fn test_answer_is_case_insensitive() {
        assert!(is_correct_answer("A", &word_a().roma));
    }

    #[test]
    fn test_answer_ignores_surrounding_whitespace() {
        assert!(is_correct_answer("a ", &word_a().roma));
        assert!(is_correct_answer("  a", &word_a().roma));
    }

    #[test]
    fn test_wrong_answer_rejected() {
        assert!(!is_correct_answer("ka", &word_a().roma));
        assert!(!is_correct_answer("", &word_a().roma));
    }

    #[test]
    fn test_expected_romaji_is_folded_too() {
        assert!(is_correct_answer("shi", "SHI"));
    }

    #[test]
    fn test_glyph_follows_script() {
        let word = word_a();
        assert_eq!(word.glyph(Script::Hiragana), "あ");
        assert_eq!(word.glyph(Script::Katakana), "ア");
    }

    #[test]
    fn test_script_toggle_round_trips() {
        assert_eq!(Script::Hiragana.toggled(), Script::Katakana);
        assert_eq!(Script::Katakana.toggled(), Script::Hiragana);
    }
}
