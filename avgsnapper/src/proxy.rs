//! Inlets told apart by proxy.
//!
//! Every message, whatever inlet it came in on, reaches the class methods. They ask
//! `Proxy::get_inlet` where it came from.

use crate::{
    snapper::{Inbound, State, ASSIST_LEFT, ASSIST_MIDDLE, ASSIST_OUTLET, ASSIST_RIGHT},
    CLASS_NAME,
};
use median::{
    atom::Atom,
    builder::MaxWrappedBuilder,
    class::Class,
    inlet::{MaxInlet, Proxy},
    method::Method,
    object::{MaxObj, MaxObjRef, ObjectHeader},
    outlet::OutInt,
    symbol::SymbolRef,
    wrapper::{MaxObjWrapped, ObjWrapped},
};

pub struct AvgSnapper {
    obj: MaxObjRef,
    state: State,
    out: OutInt,
}

impl ObjWrapped<AvgSnapper> for AvgSnapper {
    fn class_name() -> &'static str {
        CLASS_NAME
    }
}

impl MaxObjWrapped<AvgSnapper> for AvgSnapper {
    fn new(builder: &mut dyn MaxWrappedBuilder<Self>) -> Self {
        builder.with_default_inlet_assist(ASSIST_LEFT);
        builder.add_inlet_with_assist(MaxInlet::Proxy, ASSIST_MIDDLE);
        builder.add_inlet_with_assist(MaxInlet::Proxy, ASSIST_RIGHT);
        let s = Self {
            obj: builder.max_obj(),
            state: State::new(),
            out: builder.add_int_outlet_with_assist(ASSIST_OUTLET),
        };
        crate::announce(s.max_obj());
        s
    }

    fn class_setup(c: &mut Class<Self>) {
        c.add_method(Method::Bang(Self::bang));
        c.add_method(Method::Int(Self::int));
        c.add_method(Method::List(Self::list));
    }
}

impl AvgSnapper {
    pub fn bang(&self) {
        self.route(self.inlet(), Inbound::Bang);
    }

    pub fn int(&self, v: i64) {
        let inlet = self.inlet();
        self.post(format!("int came in via inlet {}", inlet));
        self.route(inlet, Inbound::Int(v));
    }

    pub fn list(&self, sel: &SymbolRef, atoms: &[Atom]) {
        let inlet = self.inlet();
        crate::post_list(self.max_obj(), sel, atoms, Some(inlet));
        self.route(inlet, Inbound::List(atoms));
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn inlet(&self) -> usize {
        Proxy::get_inlet(self.max_obj())
    }

    fn route(&self, inlet: usize, msg: Inbound) {
        crate::route(self.max_obj(), &self.out, &self.state, inlet, msg);
    }
}

impl MaxObj for AvgSnapper {
    fn max_obj(&self) -> &ObjectHeader {
        &self.obj
    }
}
