//! Declaring an object's inlets and outlets from its constructor.
use crate::{
    atom::Atom,
    host::InletKind,
    inlet::{MaxInlet, Proxy},
    object::MaxObjRef,
    outlet::{OutInt, OutList, Outlet},
    wrapper::{AnythingCBHash, IntCBHash},
};
use std::collections::HashMap;

/// The builder handed to `MaxObjWrapped::new`.
pub struct WrappedBuilder<'a, T> {
    owner: MaxObjRef,
    creation_args: &'a [Atom],
    //declared inlets, index 0 here is inlet 1
    pending: Vec<MaxInlet<T>>,
    assist_ins: HashMap<usize, String>,
    assist_outs: HashMap<usize, String>,
    outlets: usize,
}

/// Declare the outlets of an object.
///
/// Outlets are numbered left to right in the order they are added.
pub trait ObjBuilder<T> {
    /// Set the assist text of the default (leftmost) inlet.
    fn with_default_inlet_assist(&mut self, assist: &str);

    fn add_int_outlet(&mut self) -> OutInt;

    fn add_int_outlet_with_assist(&mut self, assist: &str) -> OutInt;

    fn add_list_outlet(&mut self) -> OutList;

    fn add_list_outlet_with_assist(&mut self, assist: &str) -> OutList;

    /// The atoms typed after the class name in the object box.
    fn creation_args(&self) -> &[Atom];

    /// The header of the object being built, keep it to post or to find the current inlet.
    fn max_obj(&self) -> MaxObjRef;
}

/// Declare the extra inlets of an object.
///
/// The default inlet always exists, the first inlet added is inlet 1 and they continue to the
/// right. The host creates them right to left, `finalize` takes care of that.
pub trait MaxWrappedBuilder<T>: ObjBuilder<T> {
    /// Add an inlet, returns its index.
    fn add_inlet(&mut self, inlet_type: MaxInlet<T>) -> usize;

    fn add_inlet_with_assist(&mut self, inlet_type: MaxInlet<T>, assist: &str) -> usize;
}

/// What the wrapper keeps once the constructor has returned.
pub struct MaxWrappedBuilderFinalize<T> {
    pub callbacks_int: IntCBHash<T>,
    pub callbacks_anything: AnythingCBHash<T>,
    pub proxy_inlets: Vec<Proxy>,
    pub assist_ins: HashMap<usize, String>,
    pub assist_outs: HashMap<usize, String>,
}

impl<'a, T> WrappedBuilder<'a, T> {
    pub fn new_max(owner: MaxObjRef, args: &'a [Atom]) -> Self {
        Self {
            owner,
            creation_args: args,
            pending: Vec::new(),
            assist_ins: HashMap::new(),
            assist_outs: HashMap::new(),
            outlets: 0,
        }
    }

    /// Create the declared inlets in the host and collect their callbacks.
    pub fn finalize(self) -> MaxWrappedBuilderFinalize<T> {
        let mut f = MaxWrappedBuilderFinalize {
            callbacks_int: HashMap::new(),
            callbacks_anything: HashMap::new(),
            proxy_inlets: Vec::new(),
            assist_ins: self.assist_ins,
            assist_outs: self.assist_outs,
        };
        let host = self.owner.host().clone();
        let id = self.owner.id();

        //each new inlet lands right of the default one, so create the rightmost first
        for (i, inlet) in self.pending.into_iter().enumerate().rev() {
            let index = i + 1;
            let kind = match inlet {
                MaxInlet::Proxy => {
                    f.proxy_inlets.push(Proxy::new(&self.owner, index));
                    continue;
                }
                MaxInlet::Int(cb) => {
                    f.callbacks_int.insert(index, cb);
                    InletKind::Int
                }
                MaxInlet::Anything(cb) => {
                    f.callbacks_anything.insert(index, cb);
                    InletKind::Anything
                }
            };
            host.inlet_new(id, index, kind);
        }
        f
    }

    fn outlet_assist(&mut self, assist: &str) {
        self.assist_outs.insert(self.outlets, assist.to_string());
    }
}

impl<'a, T> ObjBuilder<T> for WrappedBuilder<'a, T> {
    fn with_default_inlet_assist(&mut self, assist: &str) {
        self.assist_ins.insert(0, assist.to_string());
    }

    fn add_int_outlet(&mut self) -> OutInt {
        self.outlets += 1;
        Outlet::append_int(&self.owner)
    }

    fn add_int_outlet_with_assist(&mut self, assist: &str) -> OutInt {
        self.outlet_assist(assist);
        self.add_int_outlet()
    }

    fn add_list_outlet(&mut self) -> OutList {
        self.outlets += 1;
        Outlet::append_list(&self.owner)
    }

    fn add_list_outlet_with_assist(&mut self, assist: &str) -> OutList {
        self.outlet_assist(assist);
        self.add_list_outlet()
    }

    fn creation_args(&self) -> &[Atom] {
        self.creation_args
    }

    fn max_obj(&self) -> MaxObjRef {
        self.owner.clone()
    }
}

impl<'a, T> MaxWrappedBuilder<T> for WrappedBuilder<'a, T> {
    fn add_inlet(&mut self, inlet_type: MaxInlet<T>) -> usize {
        self.pending.push(inlet_type);
        self.pending.len()
    }

    fn add_inlet_with_assist(&mut self, inlet_type: MaxInlet<T>, assist: &str) -> usize {
        let index = self.add_inlet(inlet_type);
        self.assist_ins.insert(index, assist.to_string());
        index
    }
}
