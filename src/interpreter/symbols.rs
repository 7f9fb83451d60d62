use std::{collections::HashMap, fmt};

use crate::config::MAX_VARIABLES;

/// Index of an interned variable name.
///
/// Ids are dense and assigned in order of first appearance, so an id doubles
/// as the bit position of the variable inside an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(usize);

impl SymbolId {
    /// Returns the position of the symbol in its table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The symbol table is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// The number of names the table can hold.
    pub limit: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol table is full ({} names)", self.limit)
    }
}

impl std::error::Error for CapacityExceeded {}

/// Insertion-ordered table of variable names.
///
/// The same name always resolves to the same [`SymbolId`], and ids are never
/// reused or reset while the table lives.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names:   Vec<String>,
    by_name: HashMap<String, SymbolId>,
    limit:   usize,
}

impl SymbolTable {
    /// Creates an empty table holding at most `limit` names.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { names: Vec::new(),
               by_name: HashMap::new(),
               limit }
    }

    /// Resolves `name`, appending it if it has not been seen before.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if `name` is new and the table is full.
    ///
    /// # Example
    /// ```
    /// use entail::interpreter::symbols::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::with_limit(2);
    /// let p = symbols.intern("p").unwrap();
    /// let q = symbols.intern("q").unwrap();
    /// assert_eq!(symbols.intern("p").unwrap(), p);
    /// assert_eq!((p.index(), q.index()), (0, 1));
    /// assert!(symbols.intern("r").is_err());
    /// ```
    pub fn intern(&mut self, name: &str) -> Result<SymbolId, CapacityExceeded> {
        if let Some(id) = self.by_name.get(name) {
            return Ok(*id);
        }
        if self.names.len() >= self.limit {
            return Err(CapacityExceeded { limit: self.limit });
        }
        let id = SymbolId(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Looks up `name` without interning it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name behind `id`, if this table issued it.
    #[must_use]
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Number of distinct names interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of names.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Iterates over `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (SymbolId(i), name.as_str()))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_limit(MAX_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_appearance() {
        let mut symbols = SymbolTable::default();
        let ids: Vec<usize> = ["q", "p", "q", "r", "p"].iter()
                                                       .map(|n| symbols.intern(n).unwrap().index())
                                                       .collect();
        assert_eq!(ids, vec![0, 1, 0, 2, 1]);
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn full_table_still_resolves_known_names() {
        let mut symbols = SymbolTable::with_limit(1);
        let p = symbols.intern("p").unwrap();
        assert_eq!(symbols.intern("q"), Err(CapacityExceeded { limit: 1 }));
        assert_eq!(symbols.intern("p"), Ok(p));
        assert_eq!(symbols.limit(), 1);
        assert_eq!(SymbolTable::default().limit(), MAX_VARIABLES);
    }

    #[test]
    fn iterates_in_id_order() {
        let mut symbols = SymbolTable::default();
        symbols.intern("b").unwrap();
        symbols.intern("a").unwrap();
        let names: Vec<&str> = symbols.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(symbols.get("a").map(SymbolId::index), Some(1));
        assert!(symbols.get("c").is_none());
    }
}
