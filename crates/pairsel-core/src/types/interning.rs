//! String interning for project, file and method names.
//!
//! Uses `lasso::ThreadedRodeo` while records are loaded, then freezes into a
//! `lasso::RodeoReader` for contention-free reads during selection. Keys are
//! assigned monotonically in first-seen order and never removed.

use lasso::{Key, RodeoReader, Spur, ThreadedRodeo};

use super::identifiers::{FileId, MethodId, ProjectId};

/// Bidirectional string↔key table shared by projects, files and methods.
pub struct IdentInterner {
    inner: ThreadedRodeo,
}

impl IdentInterner {
    /// Create a new, empty interner.
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern an arbitrary string.
    pub fn intern(&self, s: &str) -> Spur {
        self.inner.get_or_intern(s)
    }

    pub fn intern_project(&self, name: &str) -> ProjectId {
        ProjectId::new(self.intern(name))
    }

    pub fn intern_file(&self, path: &str) -> FileId {
        FileId::new(self.intern(path))
    }

    pub fn intern_method(&self, signature: &str) -> MethodId {
        MethodId::new(self.intern(signature))
    }

    /// Look up a previously interned string without inserting.
    pub fn get(&self, s: &str) -> Option<Spur> {
        self.inner.get(s)
    }

    /// Resolve a key back to its string.
    pub fn resolve<K: Into<Spur>>(&self, key: K) -> &str {
        self.inner.resolve(&key.into())
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze into a read-only table with lexicographic ranks.
    pub fn freeze(self) -> FrozenIdents {
        FrozenIdents::new(self.inner.into_reader())
    }
}

impl Default for IdentInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only interned table.
///
/// Besides resolution it carries, for every key, the rank of its string in
/// byte-wise lexicographic order. Comparing ranks gives the same answer as
/// comparing the strings, without touching them.
pub struct FrozenIdents {
    reader: RodeoReader,
    ranks: Vec<u32>,
}

impl FrozenIdents {
    fn new(reader: RodeoReader) -> Self {
        let mut order: Vec<(usize, &str)> = reader
            .iter()
            .map(|(key, s)| (key.into_usize(), s))
            .collect();
        order.sort_unstable_by(|a, b| a.1.cmp(b.1));

        let mut ranks = vec![0u32; order.len()];
        for (rank, (index, _)) in order.iter().enumerate() {
            ranks[*index] = rank as u32;
        }
        drop(order);

        Self { reader, ranks }
    }

    /// Resolve a key back to its string.
    pub fn resolve<K: Into<Spur>>(&self, key: K) -> &str {
        self.reader.resolve(&key.into())
    }

    /// Look up a string's key, if it was interned.
    pub fn get(&self, s: &str) -> Option<Spur> {
        self.reader.get(s)
    }

    /// Lexicographic rank of the key's string among all interned strings.
    #[inline]
    pub fn rank<K: Into<Spur>>(&self, key: K) -> u32 {
        self.ranks[key.into().into_usize()]
    }

    pub fn len(&self) -> usize {
        self.reader.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_assigned_in_first_seen_order() {
        let interner = IdentInterner::new();
        let a = interner.intern("zeta");
        let b = interner.intern("alpha");
        let c = interner.intern("zeta");
        assert_eq!(a, c);
        assert!(a.into_usize() < b.into_usize());
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn ranks_follow_string_order_not_key_order() {
        let interner = IdentInterner::new();
        let zeta = interner.intern("zeta");
        let alpha = interner.intern("alpha");
        let mid = interner.intern("mid");
        let frozen = interner.freeze();

        assert_eq!(frozen.rank(alpha), 0);
        assert_eq!(frozen.rank(mid), 1);
        assert_eq!(frozen.rank(zeta), 2);
        assert_eq!(frozen.resolve(zeta), "zeta");
    }
}
