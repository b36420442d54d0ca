//! String references.

use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::{
    collections::HashSet,
    convert::TryFrom,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

lazy_static! {
    //names are never freed, same as the symbol table in Max
    static ref TABLE: Mutex<HashSet<&'static str>> = Mutex::new(HashSet::new());
}

/// A reference to an interned symbol.
///
/// Two `SymbolRef`s with the same name always point at the same storage, so comparison is by
/// identity, not by content.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct SymbolRef {
    value: &'static str,
}

impl SymbolRef {
    /// Find or create the symbol for `name`.
    ///
    /// The caller guarantees that `name` has no nul bytes.
    pub(crate) fn gensym(name: &str) -> Self {
        let mut table = TABLE.lock();
        let value = match table.get(name) {
            Some(v) => *v,
            None => {
                let v: &'static str = Box::leak(name.to_owned().into_boxed_str());
                table.insert(v);
                v
            }
        };
        Self { value }
    }

    /// Get the name of this symbol.
    pub fn as_str(&self) -> &'static str {
        self.value
    }

    /// Is the symbol ref empty
    pub fn is_empty(&self) -> bool {
        *self == crate::max::common_symbols().s_nothing
    }
}

impl PartialEq for SymbolRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.value, other.value)
    }
}

impl Eq for SymbolRef {}

impl Hash for SymbolRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl TryFrom<&str> for SymbolRef {
    type Error = &'static str;
    fn try_from(v: &str) -> Result<Self, Self::Error> {
        if v.contains('\0') {
            Err("symbol names cannot contain nul")
        } else {
            Ok(Self::gensym(v))
        }
    }
}

impl TryFrom<String> for SymbolRef {
    type Error = &'static str;
    fn try_from(v: String) -> Result<Self, Self::Error> {
        SymbolRef::try_from(v.as_str())
    }
}

impl From<SymbolRef> for String {
    fn from(v: SymbolRef) -> Self {
        v.value.to_string()
    }
}

impl Display for SymbolRef {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for SymbolRef {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "SymbolRef({:?})", self.value)
    }
}

impl Default for SymbolRef {
    fn default() -> Self {
        crate::max::common_symbols().s_nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_align() {
        assert_eq!(
            std::mem::size_of::<&'static str>(),
            std::mem::size_of::<SymbolRef>()
        );
    }

    #[test]
    fn same_name_same_symbol() {
        let a = SymbolRef::try_from("toast").unwrap();
        let b = SymbolRef::try_from(String::from("toast")).unwrap();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
        assert_ne!(a, SymbolRef::try_from("toast2").unwrap());
    }

    #[test]
    fn rejects_nul() {
        assert!(SymbolRef::try_from("to\0ast").is_err());
    }

    #[test]
    fn default_is_empty() {
        let s = SymbolRef::default();
        assert!(s.is_empty());
        assert_eq!("", s.as_str());
        assert!(!SymbolRef::try_from("bang").unwrap().is_empty());
    }
}
