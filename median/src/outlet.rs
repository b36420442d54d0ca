//! Routines for creating and sending data through outlets.

use crate::atom::Atom;
use crate::max::common_symbols;
use crate::object::MaxObjRef;
use crate::symbol::SymbolRef;
use std::fmt::{Display, Formatter};

/// Result type alias from sending data through an outlet.
pub type SendResult = Result<(), SendError>;
pub type OutInt = Box<dyn SendValue<i64> + Send + Sync>;
pub type OutList = Box<dyn for<'a> SendValue<&'a [Atom]> + Send + Sync>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SendError {
    StackOverflow,
}

impl Display for SendError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SendError::StackOverflow => write!(f, "stack overflow"),
        }
    }
}

impl std::error::Error for SendError {}

/// A value leaving an outlet.
#[derive(Clone, Debug, PartialEq)]
pub enum OutValue {
    Int(i64),
    List(Vec<Atom>),
}

/// Send data through an outlet.
pub trait SendValue<T> {
    fn send(&self, value: T) -> SendResult;
}

/// An outlet owned by an object.
pub struct Outlet {
    owner: MaxObjRef,
    index: usize,
}

impl Outlet {
    fn append(owner: &MaxObjRef, type_sym: Option<SymbolRef>) -> Box<Self> {
        let index = owner.host().outlet_new(owner.id(), type_sym);
        Box::new(Self {
            owner: owner.clone(),
            index,
        })
    }

    /// Create an outlet that will only send ints.
    pub fn append_int(owner: &MaxObjRef) -> OutInt {
        Self::append(owner, Some(common_symbols().s_int))
    }

    /// Create an outlet that will only send lists.
    pub fn append_list(owner: &MaxObjRef) -> OutList {
        Self::append(owner, Some(common_symbols().s_list))
    }

    fn send_value(&self, value: OutValue) -> SendResult {
        self.owner
            .host()
            .outlet_send(self.owner.id(), self.index, value)
    }
}

impl SendValue<i64> for Outlet {
    /// Send an int.
    fn send(&self, v: i64) -> SendResult {
        self.send_value(OutValue::Int(v))
    }
}

impl SendValue<&[Atom]> for Outlet {
    /// Send a list.
    fn send(&self, list: &[Atom]) -> SendResult {
        self.send_value(OutValue::List(list.to_vec()))
    }
}
