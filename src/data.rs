use crate::models::{VocabDetail, VocabItem, WordItem};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const WORDS_JSON: &str = include_str!("../data/words.json");
const VOCAB_JSON: &str = include_str!("../data/vocab_n5.json");

lazy_static::lazy_static! {
    static ref BUNDLED_WORDS: Vec<WordItem> = parse_words(WORDS_JSON).unwrap_or_else(|e| {
        log::error!("Bundled word list is invalid: {}", e);
        Vec::new()
    });
    static ref BUNDLED_VOCAB: Vec<VocabItem> = parse_vocab(VOCAB_JSON).unwrap_or_else(|e| {
        log::error!("Bundled vocabulary is invalid: {}", e);
        Vec::new()
    });
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn bundled_words() -> &'static [WordItem] {
    &BUNDLED_WORDS
}

pub fn bundled_vocab() -> &'static [VocabItem] {
    &BUNDLED_VOCAB
}

pub fn parse_words(json: &str) -> Result<Vec<WordItem>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses the vocabulary dictionary. The file holds either an object keyed by
/// kana or an array whose first element is that object; key order is kept.
pub fn parse_vocab(json: &str) -> Result<Vec<VocabItem>, DataError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let bucket = match value {
        serde_json::Value::Array(mut items) => {
            if items.is_empty() {
                return Ok(Vec::new());
            }
            items.swap_remove(0)
        }
        other => other,
    };

    let serde_json::Value::Object(map) = bucket else {
        return Ok(Vec::new());
    };

    let mut list = Vec::with_capacity(map.len());
    for (key, detail) in map {
        let detail: VocabDetail = serde_json::from_value(detail)?;
        list.push(VocabItem { key, detail });
    }
    Ok(list)
}

pub fn load_words(path: &Path) -> Result<Vec<WordItem>, DataError> {
    parse_words(&read(path)?)
}

pub fn load_vocab(path: &Path) -> Result<Vec<VocabItem>, DataError> {
    parse_vocab(&read(path)?)
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
