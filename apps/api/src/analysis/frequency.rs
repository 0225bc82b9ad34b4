//! Occurrence counter: applies every keyword rule to a text.

use crate::analysis::patterns::KeywordRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: &'static str,
    pub count: u32,
    /// Catalog position, used as the last ranking tie-break.
    pub position: usize,
}

/// Canonical keyword → occurrence count for one text. Only keywords that
/// occur at least once are stored; entries are kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<KeywordCount>,
}

impl FrequencyMap {
    pub fn count(rules: &KeywordRules, text: &str) -> Self {
        let mut entries: Vec<KeywordCount> = rules
            .rules()
            .iter()
            .filter_map(|rule| {
                let count = rule.count_in(text);
                (count > 0).then_some(KeywordCount {
                    keyword: rule.keyword,
                    count,
                    position: rule.position,
                })
            })
            .collect();
        entries.sort_by_key(|e| e.position);
        FrequencyMap { entries }
    }

    /// Occurrences of `keyword`; 0 when absent.
    pub fn get(&self, keyword: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Senior engineer. Python, Python and python again. \
        Built REST APIs with Docker. Some JavaScript.";

    #[test]
    fn test_counts_case_insensitively() {
        let map = FrequencyMap::count(KeywordRules::builtin(), SAMPLE);
        assert_eq!(map.get("python"), 3);
        assert_eq!(map.get("docker"), 1);
        assert_eq!(map.get("senior"), 1);
        assert_eq!(map.get("javascript"), 1);
    }

    #[test]
    fn test_absent_keywords_are_not_stored() {
        let map = FrequencyMap::count(KeywordRules::builtin(), SAMPLE);
        assert!(!map.contains("kubernetes"));
        assert!(!map.contains("java"));
        assert!(map.iter().all(|e| e.count > 0));
    }

    #[test]
    fn test_entries_follow_catalog_order() {
        let map = FrequencyMap::count(KeywordRules::builtin(), SAMPLE);
        let positions: Vec<usize> = map.iter().map(|e| e.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_counting_is_idempotent() {
        let rules = KeywordRules::builtin();
        assert_eq!(
            FrequencyMap::count(rules, SAMPLE),
            FrequencyMap::count(rules, SAMPLE)
        );
    }

    #[test]
    fn test_empty_text_yields_empty_map() {
        let map = FrequencyMap::count(KeywordRules::builtin(), "");
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
