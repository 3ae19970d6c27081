//! Order-independent key for a pair of method refs.

use std::cmp::Ordering;

use pairsel_core::types::FrozenIdents;

use crate::loader::MethodRef;

/// `(a, b)` and `(b, a)` map to the same key. The lexicographically
/// smaller ref (file path first, then method signature) comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    lo: MethodRef,
    hi: MethodRef,
}

impl PairKey {
    pub fn canonical(a: MethodRef, b: MethodRef, idents: &FrozenIdents) -> Self {
        if compare_refs(a, b, idents) == Ordering::Less {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn parts(&self) -> (MethodRef, MethodRef) {
        (self.lo, self.hi)
    }
}

/// String order of two refs, answered from precomputed ranks.
#[inline]
pub fn compare_refs(a: MethodRef, b: MethodRef, idents: &FrozenIdents) -> Ordering {
    idents
        .rank(a.file)
        .cmp(&idents.rank(b.file))
        .then_with(|| idents.rank(a.method).cmp(&idents.rank(b.method)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairsel_core::types::IdentInterner;

    #[test]
    fn canonical_is_symmetric_and_ordered() {
        let interner = IdentInterner::new();
        // Interned in reverse string order so key order disagrees with rank order.
        let z = MethodRef::new(interner.intern_file("z/Z.java"), interner.intern_method("a()"));
        let a = MethodRef::new(interner.intern_file("a/A.java"), interner.intern_method("z()"));
        let idents = interner.freeze();

        let k1 = PairKey::canonical(z, a, &idents);
        let k2 = PairKey::canonical(a, z, &idents);
        assert_eq!(k1, k2);
        assert_eq!(k1.parts(), (a, z));
    }

    #[test]
    fn method_breaks_file_ties() {
        let interner = IdentInterner::new();
        let file = interner.intern_file("src/A.java");
        let late = MethodRef::new(file, interner.intern_method("run()"));
        let early = MethodRef::new(file, interner.intern_method("close()"));
        let idents = interner.freeze();

        assert_eq!(compare_refs(early, late, &idents), Ordering::Less);
        assert_eq!(PairKey::canonical(late, early, &idents).parts(), (early, late));
        assert_eq!(compare_refs(late, late, &idents), Ordering::Equal);
    }
}
