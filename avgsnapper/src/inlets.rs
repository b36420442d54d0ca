//! Inlets told apart by callback.
//!
//! The middle and right inlets each get a closure that knows which inlet it belongs to. Only the
//! left inlet reaches the class methods.

use crate::{
    snapper::{
        Inbound, State, ASSIST_LEFT, ASSIST_MIDDLE, ASSIST_OUTLET, ASSIST_RIGHT, LEFT, MIDDLE,
        RIGHT,
    },
    CLASS_NAME,
};
use median::{
    atom::Atom,
    builder::MaxWrappedBuilder,
    class::Class,
    inlet::MaxInlet,
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
        builder.add_inlet_with_assist(
            MaxInlet::Anything(Box::new(|s: &Self, sel: &SymbolRef, atoms: &[Atom]| {
                s.inlet_message(MIDDLE, sel, atoms)
            })),
            ASSIST_MIDDLE,
        );
        builder.add_inlet_with_assist(
            MaxInlet::Anything(Box::new(|s: &Self, sel: &SymbolRef, atoms: &[Atom]| {
                s.inlet_message(RIGHT, sel, atoms)
            })),
            ASSIST_RIGHT,
        );
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
        self.route(LEFT, Inbound::Bang);
    }

    pub fn int(&self, v: i64) {
        self.route(LEFT, Inbound::Int(v));
    }

    pub fn list(&self, sel: &SymbolRef, atoms: &[Atom]) {
        self.list_in(LEFT, sel, atoms);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn inlet_message(&self, inlet: usize, sel: &SymbolRef, atoms: &[Atom]) {
        match Inbound::from_message(sel, atoms) {
            Some(Inbound::List(atoms)) => self.list_in(inlet, sel, atoms),
            Some(msg) => self.route(inlet, msg),
            None => self.post_error(format!("inlet {} doesn't understand \"{}\"", inlet, sel)),
        }
    }

    fn list_in(&self, inlet: usize, sel: &SymbolRef, atoms: &[Atom]) {
        crate::post_list(self.max_obj(), sel, atoms, None);
        self.route(inlet, Inbound::List(atoms));
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
