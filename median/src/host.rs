//! The services an environment provides to the objects it hosts.
//!
//! In Max these are the kernel calls (`object_alloc`, `proxy_new`, `outlet_int`, `post`..).
//! Objects only ever talk to their host through these traits, so the same external runs inside
//! any implementation of them, see [`crate::patcher::Patcher`] for an in-process one.

use crate::error::MaxResult;
use crate::outlet::{OutValue, SendResult};
use crate::symbol::SymbolRef;
use std::fmt::{Display, Formatter};

/// Identifies one object instance inside its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an inlet hands its messages to the object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InletKind {
    /// Only accepts ints, routed to a callback bound to the inlet.
    Int,
    /// Accepts anything, routed to a callback bound to the inlet along with the selector.
    Anything,
    /// Accepts anything, routed to the class methods with the inlet recorded in the object.
    Proxy,
}

/// The console window.
pub trait Console: Send + Sync {
    fn post(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub trait Host: Console {
    /// Allocate the host side of a new instance of `class`.
    fn object_alloc(&self, class: &SymbolRef) -> MaxResult<ObjectId>;

    /// Release an instance and everything the host holds for it.
    fn object_free(&self, obj: ObjectId);

    /// Post a message to the console, attributed to an object.
    fn object_post(&self, obj: ObjectId, class: &SymbolRef, msg: &str);

    /// Post an error to the console, attributed to an object.
    fn object_error(&self, obj: ObjectId, class: &SymbolRef, msg: &str);

    /// Create inlet `index` on an object.
    ///
    /// Like Max, a new inlet is placed directly to the right of the default inlet.
    fn inlet_new(&self, obj: ObjectId, index: usize, kind: InletKind);

    fn inlet_free(&self, obj: ObjectId, index: usize);

    /// Append an outlet to the right of the existing ones, `type_sym` restricts what it sends.
    /// Returns the outlet's index.
    fn outlet_new(&self, obj: ObjectId, type_sym: Option<SymbolRef>) -> usize;

    fn outlet_send(&self, obj: ObjectId, outlet: usize, value: OutValue) -> SendResult;
}
