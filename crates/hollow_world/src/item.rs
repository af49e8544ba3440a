//! Items and the item lookup table.

use std::collections::HashMap;

use hollow_foundation::ItemId;

/// A takeable, droppable thing.
///
/// Terms are the names a player may type. The first term doubles as the
/// noun shown in the inventory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    terms: Vec<String>,
    description: String,
}

impl Item {
    /// Creates an item with no terms and an empty description.
    #[must_use]
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            terms: Vec::new(),
            description: String::new(),
        }
    }

    /// Sets the terms.
    #[must_use]
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the item id.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the terms as declared.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the display noun: the first term, or the id when there are none.
    #[must_use]
    pub fn noun(&self) -> &str {
        self.terms
            .first()
            .map_or_else(|| self.id.as_str(), String::as_str)
    }

    /// Returns true if the id or any term equals `word`, ignoring case.
    #[must_use]
    pub fn answers_to(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.id.as_str().to_lowercase() == word
            || self.terms.iter().any(|term| term.to_lowercase() == word)
    }
}

/// Items indexed by id and by term.
///
/// The two indices are kept apart so a term can never shadow another item's
/// id. Terms are indexed lower-cased; when two items declare the same term
/// the later one owns it in the index.
#[derive(Clone, Debug, Default)]
pub struct ItemTable {
    by_id: HashMap<ItemId, Item>,
    by_term: HashMap<String, ItemId>,
    order: Vec<ItemId>,
}

impl ItemTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, indexing each of its terms.
    ///
    /// Returns the item previously registered under the same id, whose terms
    /// are dropped from the index first.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        let previous = self.by_id.remove(item.id());
        if let Some(old) = &previous {
            self.by_term.retain(|_, owner| owner != old.id());
        } else {
            self.order.push(item.id().clone());
        }

        for term in item.terms() {
            self.by_term.insert(term.to_lowercase(), item.id().clone());
        }
        self.by_id.insert(item.id().clone(), item);
        previous
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id)
    }

    /// Returns the id of the item that owns `term` in the term index.
    #[must_use]
    pub fn term_owner(&self, term: &str) -> Option<&ItemId> {
        self.by_term.get(&term.to_lowercase())
    }

    /// Resolves a story reference: an item id first, then a term.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&Item> {
        self.get(key)
            .or_else(|| self.term_owner(key).and_then(|id| self.by_id.get(id)))
    }

    /// Returns true if an item with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates over items in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}

impl FromIterator<Item> for ItemTable {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut table = Self::new();
        for item in iter {
            table.insert(item);
        }
        table
    }
}
