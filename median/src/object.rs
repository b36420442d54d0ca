//! Object traits.

use crate::host::{Host, ObjectId};
use crate::symbol::SymbolRef;
use std::ops::{Deref, DerefMut};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// The host side of an object instance, every object begins with one.
pub struct ObjectHeader {
    id: ObjectId,
    class_name: SymbolRef,
    host: Arc<dyn Host>,
    //written by the wrapper before it dispatches a message, read with Proxy::get_inlet
    inletnum: AtomicUsize,
}

pub type MaxObjRef = Arc<ObjectHeader>;

impl ObjectHeader {
    pub(crate) fn new(id: ObjectId, class_name: SymbolRef, host: Arc<dyn Host>) -> MaxObjRef {
        Arc::new(Self {
            id,
            class_name,
            host,
            inletnum: AtomicUsize::new(0),
        })
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn class_name(&self) -> SymbolRef {
        self.class_name
    }

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub(crate) fn inletnum(&self) -> usize {
        self.inletnum.load(Ordering::Relaxed)
    }

    /// Record `inlet` as the current inlet until the guard is dropped.
    pub(crate) fn enter_inlet(&self, inlet: usize) -> InletGuard<'_> {
        let previous = self.inletnum.swap(inlet, Ordering::Relaxed);
        InletGuard {
            header: self,
            previous,
        }
    }
}

pub(crate) struct InletGuard<'a> {
    header: &'a ObjectHeader,
    previous: usize,
}

impl<'a> Drop for InletGuard<'a> {
    fn drop(&mut self) {
        self.header.inletnum.store(self.previous, Ordering::Relaxed);
    }
}

/// Indicates that your struct is backed by an object header in a host.
pub trait MaxObj {
    fn max_obj(&self) -> &ObjectHeader;

    /// Post a message to max.
    fn post<M: AsRef<str>>(&self, msg: M) {
        crate::object::post(self.max_obj(), msg)
    }

    /// Post an error message to max.
    fn post_error<M: AsRef<str>>(&self, msg: M) {
        crate::object::error(self.max_obj(), msg)
    }
}

impl MaxObj for ObjectHeader {
    fn max_obj(&self) -> &ObjectHeader {
        self
    }
}

/// Post a message to the Max console, associated with the given object.
pub fn post<T: AsRef<str>>(obj: &ObjectHeader, msg: T) {
    obj.host.object_post(obj.id, &obj.class_name, msg.as_ref());
}

/// Post an error to the Max console, associated with the given object
pub fn error<T: AsRef<str>>(obj: &ObjectHeader, msg: T) {
    obj.host.object_error(obj.id, &obj.class_name, msg.as_ref());
}

/// A smart pointer for an object that the host allocated, frees it in the host when dropped.
pub struct ObjBox<T: MaxObj> {
    value: Option<Box<T>>, //option box so that we can drop the value before freeing
}

impl<T: MaxObj> ObjBox<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
        }
    }
}

impl<T: MaxObj> Deref for ObjBox<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match &self.value {
            Some(v) => v,
            None => unreachable!("value is only taken in drop"),
        }
    }
}

impl<T: MaxObj> DerefMut for ObjBox<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.value {
            Some(v) => v,
            None => unreachable!("value is only taken in drop"),
        }
    }
}

impl<T: MaxObj> Drop for ObjBox<T> {
    fn drop(&mut self) {
        if let Some(v) = self.value.take() {
            let id = v.max_obj().id();
            let host = v.max_obj().host().clone();
            //proxies and outlets go before the object itself
            std::mem::drop(v);
            host.object_free(id);
        }
    }
}
