use crate::atom::{Atom, AtomType};
use crate::symbol::SymbolRef;

pub type B<T> = fn(&T);
pub type I<T> = fn(&T, i64);
pub type SelList<T> = fn(&T, &SymbolRef, &[Atom]);

/// Methods that a class can respond to.
pub enum Method<'a, T> {
    Bang(B<T>),
    Int(I<T>),
    List(SelList<T>),
    Anything(SelList<T>),
    Sel(&'a str, B<T>),
    SelVarArg(&'a str, SelList<T>),
}

/// What a selector is bound to in a class.
pub(crate) enum Handler<T> {
    Bang(B<T>),
    Int(I<T>),
    Gimme(SelList<T>),
    /// Registered but cannot be called from a patch.
    Cant,
}

impl<T> Handler<T> {
    /// The argument type this handler was registered with.
    pub fn arg_type(&self) -> AtomType {
        match self {
            Handler::Bang(_) => AtomType::Nothing,
            Handler::Int(_) => AtomType::Int,
            Handler::Gimme(_) => AtomType::Gimme,
            Handler::Cant => AtomType::Cant,
        }
    }
}
