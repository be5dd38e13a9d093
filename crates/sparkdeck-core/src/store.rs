//! Data Store
//!
//! Owns the loaded ideas, the derived filtered/sorted sequence and the
//! current index. The only writer of any of them.

use crate::domain::{CategoryFilter, DeckStats, DomainError, DomainResult, Idea, SortKey};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    /// Ideas in load order
    ideas: Vec<Idea>,
    /// `ideas` filtered by `category`, ordered by `sort`
    filtered: Vec<Idea>,
    category: CategoryFilter,
    sort: SortKey,
    /// Always `< filtered.len()` when `filtered` is non-empty, 0 otherwise
    index: usize,
}

impl DataStore {
    pub fn new(ideas: Vec<Idea>) -> Self {
        let mut store = Self::default();
        store.load(ideas);
        store
    }

    /// Replace the catalog, keeping the active filter and sort
    pub fn load(&mut self, ideas: Vec<Idea>) {
        log::debug!("store: loaded {} ideas", ideas.len());
        self.ideas = ideas;
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.recompute();
        if self.filtered.is_empty() {
            log::debug!("store: no ideas in category '{}'", self.category.as_str());
        }
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.recompute();
    }

    /// Move by `delta`, wrapping in both directions. No-op when empty.
    pub fn advance(&mut self, delta: isize) {
        let len = self.filtered.len() as isize;
        if len == 0 {
            return;
        }
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }

    /// Jump to `index`; out-of-range indices are rejected and leave the index untouched.
    pub fn go_to(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.filtered.len() {
            return Err(DomainError::InvalidInput(format!(
                "index {} out of range for {} ideas",
                index,
                self.filtered.len()
            )));
        }
        self.index = index;
        Ok(())
    }

    pub fn compute_stats(&self) -> DeckStats {
        DeckStats::from_ideas(&self.filtered)
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn filtered(&self) -> &[Idea] {
        &self.filtered
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Idea> {
        self.filtered.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Distinct categories across the whole catalog, in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for idea in &self.ideas {
            if !seen.iter().any(|c| *c == idea.category) {
                seen.push(idea.category.clone());
            }
        }
        seen
    }

    pub fn next_id(&self) -> u32 {
        self.ideas.iter().map(|idea| idea.id).max().unwrap_or(0) + 1
    }

    fn recompute(&mut self) {
        self.filtered = self
            .ideas
            .iter()
            .filter(|idea| self.category.matches(idea))
            .cloned()
            .collect();
        // from load order, so ties keep load order
        sort_ideas(&mut self.filtered, self.sort);
        self.index = 0;
    }
}

/// Stable sort; ties keep their relative order
pub fn sort_ideas(ideas: &mut [Idea], key: SortKey) {
    match key {
        SortKey::Newest => ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => ideas.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Rating => ideas.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Complexity => ideas.sort_by_key(|idea| idea.complexity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn idea(id: u32, category: &str, day: u32, rating: f64, complexity: u8) -> Idea {
        let mut idea = Idea::new(id, format!("Idea {}", id), category);
        idea.created_at = Some(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap());
        idea.rating = rating;
        idea.complexity = complexity;
        idea
    }

    fn catalog() -> Vec<Idea> {
        vec![
            idea(1, "saas", 15, 4.5, 2),
            idea(2, "saas", 10, 4.2, 1),
            idea(3, "tech", 5, 4.8, 3),
            idea(4, "ai", 8, 4.6, 3),
            idea(5, "ai", 12, 4.9, 4),
        ]
    }

    fn ids(store: &DataStore) -> Vec<u32> {
        store.filtered().iter().map(|idea| idea.id).collect()
    }

    #[test]
    fn test_fresh_store_is_newest_first() {
        let store = DataStore::new(catalog());
        assert_eq!(store.sort(), SortKey::Newest);
        assert_eq!(ids(&store), vec![1, 5, 2, 4, 3]);
        assert_eq!(store.ideas().iter().map(|idea| idea.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_keeps_newest_order() {
        let mut store = DataStore::new(catalog());
        for (category, expected) in [("saas", vec![1, 2]), ("tech", vec![3]), ("ai", vec![5, 4])] {
            store.set_category(CategoryFilter::from(category));
            assert_eq!(ids(&store), expected);
        }
        store.set_category(CategoryFilter::All);
        assert_eq!(ids(&store), vec![1, 5, 2, 4, 3]);
    }

    #[test]
    fn test_reload_keeps_active_sort() {
        let mut store = DataStore::new(catalog());
        store.set_sort(SortKey::Oldest);
        store.load(catalog());
        assert_eq!(store.sort(), SortKey::Oldest);
        assert_eq!(ids(&store), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn test_filter_resets_index() {
        let mut store = DataStore::new(catalog());
        store.go_to(3).unwrap();
        store.set_category(CategoryFilter::from("ai"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut store = DataStore::new(catalog());
        store.set_category(CategoryFilter::from("fintech"));
        assert!(store.is_empty());
        assert!(store.current().is_none());
        store.advance(1);
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_sort_orders() {
        let mut store = DataStore::new(catalog());
        store.set_sort(SortKey::Newest);
        assert_eq!(ids(&store), vec![1, 5, 2, 4, 3]);
        store.set_sort(SortKey::Oldest);
        assert_eq!(ids(&store), vec![3, 4, 2, 5, 1]);
        store.set_sort(SortKey::Rating);
        assert_eq!(ids(&store), vec![5, 3, 4, 1, 2]);
        store.set_sort(SortKey::Complexity);
        assert_eq!(ids(&store), vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut store = DataStore::new(catalog());
        for key in SortKey::ALL {
            store.set_sort(key);
            let once = ids(&store);
            store.set_sort(key);
            assert_eq!(ids(&store), once, "{:?}", key);
        }
        // ties on complexity 3 keep load order (3 before 4)
        store.set_category(CategoryFilter::All);
        store.set_sort(SortKey::Complexity);
        let order = ids(&store);
        let pos = |id| order.iter().position(|x| *x == id).unwrap();
        assert!(pos(3) < pos(4));
    }

    #[test]
    fn test_category_change_applies_active_sort() {
        let mut store = DataStore::new(catalog());
        store.set_sort(SortKey::Rating);
        store.set_category(CategoryFilter::from("saas"));
        assert_eq!(ids(&store), vec![1, 2]);
        store.set_category(CategoryFilter::from("ai"));
        assert_eq!(ids(&store), vec![5, 4]);
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let mut store = DataStore::new(catalog());
        store.advance(-1);
        assert_eq!(store.current_index(), 4);
        store.advance(1);
        assert_eq!(store.current_index(), 0);
        store.advance(7);
        assert_eq!(store.current_index(), 2);
        for start in 0..store.len() {
            store.go_to(start).unwrap();
            store.advance(1);
            store.advance(-1);
            assert_eq!(store.current_index(), start);
        }
    }

    #[test]
    fn test_single_idea_wraps_to_self() {
        let mut store = DataStore::new(vec![idea(1, "tech", 1, 3.0, 1)]);
        store.advance(1);
        assert_eq!(store.current_index(), 0);
        store.advance(-1);
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut store = DataStore::new(catalog());
        store.go_to(2).unwrap();
        for bad in [5, 6, 100, usize::MAX] {
            assert!(store.go_to(bad).is_err());
            assert_eq!(store.current_index(), 2);
        }
        let mut empty = DataStore::new(Vec::new());
        assert!(empty.go_to(0).is_err());
        assert_eq!(empty.current_index(), 0);
    }

    #[test]
    fn test_categories_and_next_id() {
        let store = DataStore::new(catalog());
        assert_eq!(store.categories(), vec!["saas", "tech", "ai"]);
        assert_eq!(store.next_id(), 6);
    }
}
