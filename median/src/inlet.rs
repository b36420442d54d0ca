//! Inlets
use crate::atom::Atom;
use crate::host::InletKind;
use crate::object::{MaxObjRef, ObjectHeader};
use crate::symbol::SymbolRef;

///Callback method for Int inlet
pub type IntCB<T> = Box<dyn Fn(&T, i64) + Send + Sync>;
///Callback method for Anything inlet, gets the selector and the atoms
pub type AnythingCB<T> = Box<dyn Fn(&T, &SymbolRef, &[Atom]) + Send + Sync>;

/// Inlets for Max objects
pub enum MaxInlet<T> {
    Int(IntCB<T>),
    Anything(AnythingCB<T>),
    Proxy,
}

/// Encapsulation of a Max Proxy inlet
pub struct Proxy {
    owner: MaxObjRef,
    id: usize,
}

impl Proxy {
    pub fn new(owner: &MaxObjRef, id: usize) -> Self {
        owner.host().inlet_new(owner.id(), id, InletKind::Proxy);
        Self {
            owner: owner.clone(),
            id,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Which inlet the message currently being handled arrived on.
    pub fn get_inlet(owner: &ObjectHeader) -> usize {
        owner.inletnum()
    }
}

impl Drop for Proxy {
    fn drop(&mut self) {
        self.owner.host().inlet_free(self.owner.id(), self.id);
    }
}
