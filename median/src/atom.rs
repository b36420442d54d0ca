//! Atoms, typed datum.
//!
//! see [cycling 74 docs](https://cycling74.com/sdk/max-sdk-8.0.3/html/group__atom.html)

use crate::error::{MaxError, MaxResult};
use crate::symbol::SymbolRef;
use std::convert::TryFrom;

/// Atom type tags, numbered as in the Max SDK (`e_max_atomtypes`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AtomType {
    Nothing = 0,
    Int = 1,
    Float = 2,
    Symbol = 3,
    Object = 4,
    DefInt = 5,
    DefFloat = 6,
    DefSymbol = 7,
    Gimme = 8,
    Cant = 9,
    Semi = 10,
    Comma = 11,
    Dollar = 12,
    DollarSymbol = 13,
    GimmeBack = 14,
}

impl AtomType {
    /// The numeric tag Max uses for this type.
    pub fn tag(self) -> i64 {
        self as i64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AtomValue {
    Int(i64),
    Float(f64),
    Symbol(SymbolRef),
    /// Any atom that carries no int, float or symbol payload.
    Other(AtomType),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    value: AtomValue,
}

impl Atom {
    /// Create an atom of the given type holding that type's zero value.
    pub fn with_type(t: AtomType) -> Self {
        match t {
            AtomType::Int => Self::from(0i64),
            AtomType::Float => Self::from(0f64),
            AtomType::Symbol => Self::from(SymbolRef::default()),
            _ => Self {
                value: AtomValue::Other(t),
            },
        }
    }

    pub fn get_type(&self) -> AtomType {
        match self.value {
            AtomValue::Int(_) => AtomType::Int,
            AtomValue::Float(_) => AtomType::Float,
            AtomValue::Symbol(_) => AtomType::Symbol,
            AtomValue::Other(t) => t,
        }
    }

    pub fn get_value(&self) -> AtomValue {
        self.value.clone()
    }

    /// Get the value as an int, floats are truncated, anything else reads as 0.
    pub fn get_int(&self) -> i64 {
        match self.value {
            AtomValue::Int(v) => v,
            AtomValue::Float(v) => v as i64,
            _ => 0,
        }
    }

    /// Get the value as a float, anything that isn't a number reads as 0.
    pub fn get_float(&self) -> f64 {
        match self.value {
            AtomValue::Int(v) => v as f64,
            AtomValue::Float(v) => v,
            _ => 0f64,
        }
    }

    /// Get the symbol, non symbol atoms read as the empty symbol.
    pub fn get_symbol(&self) -> SymbolRef {
        match self.value {
            AtomValue::Symbol(s) => s,
            _ => SymbolRef::default(),
        }
    }

}

impl From<i64> for Atom {
    fn from(v: i64) -> Self {
        Self {
            value: AtomValue::Int(v),
        }
    }
}

impl From<f64> for Atom {
    fn from(v: f64) -> Self {
        Self {
            value: AtomValue::Float(v),
        }
    }
}

impl From<SymbolRef> for Atom {
    fn from(v: SymbolRef) -> Self {
        Self {
            value: AtomValue::Symbol(v),
        }
    }
}

/// Split message box text into atoms.
///
/// Words that parse as integers become `Int`, words that parse as floats become `Float`, `;` and
/// `,` become `Semi` and `Comma`, everything else is a symbol.
pub fn parse(text: &str) -> MaxResult<Vec<Atom>> {
    let mut atoms = Vec::new();
    for word in text
        .split_whitespace()
        .flat_map(|w| split_punctuation(w).into_iter())
    {
        let atom = match word {
            ";" => Atom::with_type(AtomType::Semi),
            "," => Atom::with_type(AtomType::Comma),
            w => {
                if let Ok(v) = w.parse::<i64>() {
                    Atom::from(v)
                } else if let Ok(v) = w.parse::<f64>() {
                    Atom::from(v)
                } else {
                    Atom::from(SymbolRef::try_from(w).map_err(|_| MaxError::Generic)?)
                }
            }
        };
        atoms.push(atom);
    }
    Ok(atoms)
}

//"foo;" is two words in a message box
fn split_punctuation(word: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if c == ';' || c == ',' {
            if start < i {
                out.push(&word[start..i]);
            }
            out.push(&word[i..i + 1]);
            start = i + 1;
        }
    }
    if start < word.len() {
        out.push(&word[start..]);
    }
    out
}
