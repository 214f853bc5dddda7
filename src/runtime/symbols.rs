use std::collections::HashMap;

use indexmap::IndexSet;

/// Insertion-ordered set of variable names.
///
/// A name's slot is its insertion index; the first occurrence wins and slots
/// are never reassigned or removed.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: IndexSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `name`, assigning the next free one if unseen.
    pub fn resolve(&mut self, name: &str) -> usize {
        if let Some(slot) = self.names.get_index_of(name) {
            return slot;
        }
        self.names.insert_full(name.to_string()).0
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    pub fn name(&self, slot: usize) -> Option<&str> {
        self.names.get_index(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

/// Sparse slot → value storage. A slot holds nothing until stored to.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cells: HashMap<usize, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, slot: usize) -> Option<f64> {
        self.cells.get(&slot).copied()
    }

    pub fn store(&mut self, slot: usize, value: f64) {
        self.cells.insert(slot, value);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.resolve("hp"), 0);
        assert_eq!(symbols.resolve("damage"), 1);
        assert_eq!(symbols.resolve("hp"), 0);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols.name(1), Some("damage"));
        assert_eq!(symbols.lookup("armor"), None);
    }

    #[test]
    fn test_iter_in_slot_order() {
        let mut symbols = SymbolTable::new();
        symbols.resolve("b");
        symbols.resolve("a");
        let names: Vec<_> = symbols.iter().collect();
        assert_eq!(names, vec![(0, "b"), (1, "a")]);
    }

    #[test]
    fn test_store_is_sparse() {
        let mut memory = MemoryStore::new();
        assert_eq!(memory.load(0), None);
        memory.store(3, 1.5);
        assert_eq!(memory.load(3), Some(1.5));
        assert_eq!(memory.load(2), None);
        memory.store(3, -1.0);
        assert_eq!(memory.load(3), Some(-1.0));
    }
}
