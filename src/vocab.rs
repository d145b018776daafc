use crate::models::VocabItem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct VocabBrowser {
    pub list: Vec<VocabItem>,
    pub query: String,
    pub index: usize,
    pub show_meaning: bool,
    pub editing_query: bool,
    filtered: Vec<usize>,
    rng: StdRng,
}

impl VocabBrowser {
    pub fn new(list: Vec<VocabItem>) -> Self {
        Self::with_rng(list, StdRng::from_entropy())
    }

    pub fn with_rng(list: Vec<VocabItem>, rng: StdRng) -> Self {
        let filtered = (0..list.len()).collect();
        Self {
            list,
            query: String::new(),
            index: 0,
            show_meaning: false,
            editing_query: false,
            filtered,
            rng,
        }
    }

    /// Number of entries matching the current query.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn current(&self) -> Option<&VocabItem> {
        self.filtered.get(self.index).map(|&i| &self.list[i])
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.show_meaning = false;
        self.index = (self.index + 1) % self.filtered.len();
    }

    pub fn prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.show_meaning = false;
        let len = self.filtered.len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn shuffle(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.show_meaning = false;
        self.index = self.rng.gen_range(0..self.filtered.len());
    }

    pub fn toggle_meaning(&mut self) {
        self.show_meaning = !self.show_meaning;
    }

    fn refilter(&mut self) {
        let q = self.query.trim().to_lowercase();
        self.filtered = if q.is_empty() {
            (0..self.list.len()).collect()
        } else {
            self.list
                .iter()
                .enumerate()
                .filter(|(_, item)| matches_query(item, &q))
                .map(|(i, _)| i)
                .collect()
        };
        if self.index >= self.filtered.len() {
            self.index = 0;
        }
    }
}

fn matches_query(item: &VocabItem, q: &str) -> bool {
    let field = |s: &Option<String>| {
        s.as_deref()
            .map(|v| v.to_lowercase().contains(q))
            .unwrap_or(false)
    };
    item.key.to_lowercase().contains(q)
        || field(&item.detail.kanji)
        || field(&item.detail.eng)
        || field(&item.detail.vni)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VocabDetail;

    fn item(key: &str, kanji: Option<&str>, eng: &str, vni: &str) -> VocabItem {
        VocabItem {
            key: key.to_string(),
            detail: VocabDetail {
                kanji: kanji.map(str::to_string),
                eng: Some(eng.to_string()),
                vni: Some(vni.to_string()),
                example: None,
                example_vni: None,
            },
        }
    }

    fn browser() -> VocabBrowser {
        VocabBrowser::with_rng(
            vec![
                item("いぬ", Some("犬"), "dog", "con chó"),
                item("ねこ", Some("猫"), "cat", "con mèo"),
                item("やま", Some("山"), "mountain", "núi"),
                item("テレビ", None, "Television", "ti vi"),
            ],
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        let mut b = browser();
        b.prev();
        assert_eq!(b.current().unwrap().key, "テレビ");
        b.next();
        assert_eq!(b.current().unwrap().key, "いぬ");
        b.next();
        assert_eq!(b.current().unwrap().key, "ねこ");
    }

    #[test]
    fn test_navigation_hides_meaning() {
        let mut b = browser();
        b.toggle_meaning();
        assert!(b.show_meaning);
        b.next();
        assert!(!b.show_meaning);
        b.toggle_meaning();
        b.shuffle();
        assert!(!b.show_meaning);
    }

    #[test]
    fn test_query_matches_each_field_case_insensitively() {
        let mut b = browser();
        b.set_query("TELE");
        assert_eq!(b.len(), 1);
        assert_eq!(b.current().unwrap().key, "テレビ");

        b.set_query("猫");
        assert_eq!(b.current().unwrap().key, "ねこ");

        b.set_query("con");
        assert_eq!(b.len(), 2);

        b.set_query("やま");
        assert_eq!(b.current().unwrap().detail.eng.as_deref(), Some("mountain"));
    }

    #[test]
    fn test_blank_query_shows_everything() {
        let mut b = browser();
        b.set_query("   ");
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_index_resets_when_filter_shrinks() {
        let mut b = browser();
        b.next();
        b.next();
        b.next();
        assert_eq!(b.index, 3);
        b.set_query("dog");
        assert_eq!(b.index, 0);
        assert_eq!(b.current().unwrap().key, "いぬ");
    }

    #[test]
    fn test_no_match_means_no_current_item() {
        let mut b = browser();
        b.set_query("zebra");
        assert!(b.is_empty());
        assert!(b.current().is_none());
        b.next();
        b.shuffle();
        assert!(b.current().is_none());
    }

    #[test]
    fn test_shuffle_stays_in_filtered_view() {
        let mut b = browser();
        b.set_query("con");
        for _ in 0..10 {
            b.shuffle();
            assert!(b.index < 2);
        }
    }

    #[test]
    fn test_query_editing_refilters() {
        let mut b = browser();
        b.push_query_char('c');
        b.push_query_char('a');
        assert_eq!(b.len(), 1);
        b.pop_query_char();
        assert!(b.len() >= 2);
    }

    #[test]
    fn test_empty_dictionary() {
        let b = VocabBrowser::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        assert!(b.current().is_none());
    }
}
