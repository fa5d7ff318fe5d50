use std::collections::{BTreeMap, BTreeSet};

/// Related lemmas of one input word, grouped by the stem they were found under
///
/// Grouping is by stem text only, so stems that coincide across parts of
/// speech (noun `dog`, verb `dog`) share one group. Iteration is ordered by
/// stem, which has no relation to the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedWordSet {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl RelatedWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I, S>(&mut self, stem: &str, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_mut(stem).extend(lemmas.into_iter().map(Into::into));
    }

    fn group_mut(&mut self, stem: &str) -> &mut BTreeSet<String> {
        self.groups.entry(stem.to_string()).or_default()
    }

    pub fn get(&self, stem: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(stem)
    }

    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(stem, lemmas)| (stem.as_str(), lemmas))
    }

    /// Number of stems with at least one lemma
    pub fn len(&self) -> usize {
        self.groups.values().filter(|lemmas| !lemmas.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total lemma count across stems
    pub fn lemma_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}
