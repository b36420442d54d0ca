//! Class registration.

use crate::atom::{Atom, AtomType};
use crate::error::{MaxError, MaxResult};
use crate::max::common_symbols;
use crate::method::{Handler, Method};
use crate::symbol::SymbolRef;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::convert::TryFrom;

lazy_static! {
    //every (namespace, name) that has been registered in this process
    static ref REGISTERED: Mutex<HashSet<(ClassType, SymbolRef)>> = Mutex::new(HashSet::new());
}

pub struct Class<T> {
    name: SymbolRef,
    methods: HashMap<SymbolRef, Handler<T>>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClassType {
    Box,
    NoBox,
}

impl From<ClassType> for SymbolRef {
    fn from(val: ClassType) -> Self {
        match val {
            ClassType::NoBox => common_symbols().s_nobox,
            ClassType::Box => common_symbols().s_box,
        }
    }
}

/// Why a message could not be handed to a method.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum DispatchError {
    NotUnderstood,
    Cant,
}

fn to_symbol(name: &str) -> MaxResult<SymbolRef> {
    SymbolRef::try_from(name).map_err(|_| MaxError::Generic)
}

impl<T> Class<T> {
    pub fn exists_in_max(name: &str, class_type: ClassType) -> bool {
        match SymbolRef::try_from(name) {
            Ok(name) => REGISTERED.lock().contains(&(class_type, name)),
            Err(_) => false,
        }
    }

    /// Create a new class with the given name.
    pub fn new(name: &str) -> MaxResult<Self> {
        Ok(Self {
            name: to_symbol(name)?,
            methods: HashMap::new(),
        })
    }

    pub fn name(&self) -> SymbolRef {
        self.name
    }

    /// Register the class in the namespace for `class_type`.
    pub fn register(&mut self, class_type: ClassType) -> MaxResult<()> {
        if REGISTERED.lock().insert((class_type, self.name)) {
            Ok(())
        } else {
            Err(MaxError::Duplicate)
        }
    }

    /// Add a method, replacing any method already bound to the same selector.
    pub fn add_method(&mut self, m: Method<T>) {
        let s = common_symbols();
        let (sel, handler) = match m {
            Method::Bang(f) => (Ok(s.s_bang), Handler::Bang(f)),
            Method::Int(f) => (Ok(s.s_int), Handler::Int(f)),
            Method::List(f) => (Ok(s.s_list), Handler::Gimme(f)),
            Method::Anything(f) => (Ok(s.s_anything), Handler::Gimme(f)),
            Method::Sel(sel, f) => (to_symbol(sel), Handler::Bang(f)),
            Method::SelVarArg(sel, f) => (to_symbol(sel), Handler::Gimme(f)),
        };
        match sel {
            Ok(sel) => {
                self.methods.insert(sel, handler);
            }
            Err(e) => crate::error!("{}: couldn't add method: {}", self.name, e),
        }
    }

    /// Bind a selector that only the host may call, like `assist`.
    pub(crate) fn add_cant(&mut self, sel: SymbolRef) {
        self.methods.insert(sel, Handler::Cant);
    }

    /// The argument type the method for `sel` was registered with.
    pub fn method_type(&self, sel: &str) -> Option<AtomType> {
        let sel = SymbolRef::try_from(sel).ok()?;
        self.methods.get(&sel).map(Handler::arg_type)
    }

    /// Hand a message to the method bound to `sel`, or to `anything` if there is none.
    pub(crate) fn call(&self, obj: &T, sel: &SymbolRef, args: &[Atom]) -> Result<(), DispatchError> {
        let handler = self
            .methods
            .get(sel)
            .or_else(|| self.methods.get(&common_symbols().s_anything))
            .ok_or(DispatchError::NotUnderstood)?;
        match handler {
            Handler::Bang(f) => f(obj),
            Handler::Int(f) => f(obj, args.first().map(Atom::get_int).unwrap_or(0)),
            Handler::Gimme(f) => f(obj, sel, args),
            Handler::Cant => return Err(DispatchError::Cant),
        }
        Ok(())
    }
}
