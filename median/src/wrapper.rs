//! External MaxObjWrappers.

use crate::{
    atom::Atom,
    builder::WrappedBuilder,
    builder::MaxWrappedBuilder,
    class::{Class, ClassType, DispatchError},
    error::{MaxError, MaxResult},
    host::Host,
    inlet::{AnythingCB, IntCB, Proxy},
    max::common_symbols,
    object::{MaxObj, MaxObjRef, ObjBox, ObjectHeader},
    symbol::SymbolRef,
};

use std::{any::Any, collections::HashMap, sync::Arc};

use lazy_static::lazy_static;
use parking_lot::Mutex;

lazy_static! {
    //type name -> registered class
    static ref CLASSES: Mutex<HashMap<&'static str, Arc<dyn Any + Send + Sync>>> = Mutex::new(HashMap::new());
}

pub type IntCBHash<T> = HashMap<usize, IntCB<T>>;
pub type AnythingCBHash<T> = HashMap<usize, AnythingCB<T>>;

pub trait ObjWrapped<T>: Sized + Send + Sync + 'static {
    /// The name of your class, this is what you'll type into a box in Max if your class is a
    /// `ClassType::Box`.
    fn class_name() -> &'static str;

    /// The type of your class. Defaults to 'box' which creates visual objects in Max.
    fn class_type() -> ClassType {
        ClassType::Box
    }
}

pub trait MaxObjWrapped<T>: ObjWrapped<T> {
    /// A constructor for your object.
    ///
    /// # Arguments
    ///
    /// * `builder` - A builder for constructing inlets/oulets/etc.
    fn new(builder: &mut dyn MaxWrappedBuilder<T>) -> Self;

    /// Register any methods you need for your class.
    fn class_setup(_class: &mut Class<T>) {
        //default, do nothing
    }
}

pub trait WrapperWrapped<T> {
    /// Retrieve a reference to your wrapped class.
    fn wrapped(&self) -> &T;
}

/// Which side of the object an assist request is about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssistIo {
    Inlet,
    Outlet,
}

pub struct MaxObjWrapper<T> {
    s_obj: MaxObjRef,
    class: Arc<Class<T>>,
    wrapped: T,
    callbacks_int: IntCBHash<T>,
    callbacks_anything: AnythingCBHash<T>,
    proxy_inlets: Vec<Proxy>,
    assist_ins: HashMap<usize, String>,
    assist_outs: HashMap<usize, String>,
}

fn key<T>() -> &'static str {
    std::any::type_name::<T>()
}

impl<T> MaxObjWrapper<T>
where
    T: MaxObjWrapped<T>,
{
    /// Register the class.
    ///
    /// # Remarks
    ///
    /// Internally, this locks a mutex and looks up your class by type name. If your class has
    /// already been registered it won't re-register.
    ///
    /// This will deadlock if you call `register()` again inside your `T::class_setup()`.
    pub fn register() -> MaxResult<()> {
        let key = key::<T>();
        let mut h = CLASSES.lock();
        if !h.contains_key(key) {
            let mut c = Class::<T>::new(T::class_name())?;
            c.add_cant(common_symbols().s_assist);
            T::class_setup(&mut c);
            c.register(T::class_type())?;
            h.insert(key, Arc::new(c));
        }
        Ok(())
    }

    fn class() -> MaxResult<Arc<Class<T>>> {
        let c = CLASSES
            .lock()
            .get(key::<T>())
            .cloned()
            .ok_or(MaxError::NotRegistered)?;
        c.downcast::<Class<T>>().map_err(|_| MaxError::Generic)
    }

    /// Create an instance of the wrapper inside `host`.
    ///
    /// Fails without running `T::new` if the class isn't registered or the host can't allocate
    /// the object.
    pub fn new(host: Arc<dyn Host>, args: &[Atom]) -> MaxResult<ObjBox<Self>> {
        let class = Self::class()?;
        let id = host.object_alloc(&class.name())?;
        let s_obj = ObjectHeader::new(id, class.name(), host);
        let mut builder = WrappedBuilder::new_max(s_obj.clone(), args);
        let wrapped = T::new(&mut builder);
        let f = builder.finalize();
        Ok(ObjBox::new(Self {
            s_obj,
            class,
            wrapped,
            callbacks_int: f.callbacks_int,
            callbacks_anything: f.callbacks_anything,
            proxy_inlets: f.proxy_inlets,
            assist_ins: f.assist_ins,
            assist_outs: f.assist_outs,
        }))
    }

    /// Create an instance of the wrapper with no arguments.
    pub fn new_noargs(host: Arc<dyn Host>) -> MaxResult<ObjBox<Self>> {
        Self::new(host, &[])
    }

    pub fn bang(&self, inlet: usize) {
        self.anything(inlet, &common_symbols().s_bang, &[]);
    }

    pub fn int(&self, inlet: usize, v: i64) {
        self.anything(inlet, &common_symbols().s_int, &[Atom::from(v)]);
    }

    pub fn float(&self, inlet: usize, v: f64) {
        self.anything(inlet, &common_symbols().s_float, &[Atom::from(v)]);
    }

    pub fn list(&self, inlet: usize, atoms: &[Atom]) {
        self.anything(inlet, &common_symbols().s_list, atoms);
    }

    /// Deliver a message that arrived on `inlet`.
    ///
    /// Proxy inlets and the default inlet go to the class methods, with the inlet recorded for
    /// `Proxy::get_inlet`. Int inlets go to their callback and take ints and floats (truncated),
    /// anything inlets hand every message to their callback.
    pub fn anything(&self, inlet: usize, sel: &SymbolRef, atoms: &[Atom]) {
        let _guard = self.s_obj.enter_inlet(inlet);
        if inlet == 0 || self.proxy_inlets.iter().any(|p| p.id() == inlet) {
            match self.class.call(&self.wrapped, sel, atoms) {
                Ok(()) => (),
                Err(DispatchError::NotUnderstood) => {
                    self.post_error(format!("doesn't understand \"{}\"", sel))
                }
                Err(DispatchError::Cant) => {
                    self.post_error(format!("\"{}\" can't be sent to an inlet", sel))
                }
            }
        } else if !self.call_typed(inlet, sel, atoms) {
            self.post_error(format!("inlet {} doesn't understand \"{}\"", inlet, sel));
        }
    }

    //returns false if the inlet doesn't exist or doesn't take this selector
    fn call_typed(&self, inlet: usize, sel: &SymbolRef, atoms: &[Atom]) -> bool {
        let s = common_symbols();
        let number = *sel == s.s_int || *sel == s.s_float;
        let first = atoms.first().cloned().unwrap_or_else(|| Atom::from(0i64));
        if let Some(cb) = self.callbacks_int.get(&inlet) {
            if number {
                cb(&self.wrapped, first.get_int());
            }
            number
        } else if let Some(cb) = self.callbacks_anything.get(&inlet) {
            cb(&self.wrapped, sel, atoms);
            true
        } else {
            false
        }
    }

    /// Fill `s` with the assistance text for an inlet or outlet.
    ///
    /// `s` is left untouched when there is no text for that index.
    pub fn assist(&self, io: AssistIo, index: usize, s: &mut String) {
        let table = match io {
            AssistIo::Inlet => &self.assist_ins,
            AssistIo::Outlet => &self.assist_outs,
        };
        if let Some(a) = table.get(&index) {
            s.clear();
            s.push_str(a);
        }
    }
}

impl<T> WrapperWrapped<T> for MaxObjWrapper<T> {
    fn wrapped(&self) -> &T {
        &self.wrapped
    }
}

impl<T> MaxObj for MaxObjWrapper<T> {
    fn max_obj(&self) -> &ObjectHeader {
        &self.s_obj
    }
}
