//! # avgsnapper
//!
//! A three inlet adder. An int in the left inlet stores the left operand and sends out the sum of
//! the left and middle operands, `bang` in the left inlet sends the sum again, an int in the middle
//! inlet only stores the middle operand. Lists, on any inlet, are stored and printed to the
//! console.
//!
//! There are two ways to tell inlets apart, [`inlets::AvgSnapper`] gives every extra inlet its own
//! callback, [`proxy::AvgSnapper`] uses proxies and asks which inlet a message came in on. They
//! behave the same.
use median::{
    atom::Atom, error::MaxResult, object::ObjectHeader, outlet::OutInt, symbol::SymbolRef,
    wrapper::MaxObjWrapper,
};

pub mod inlets;
pub mod proxy;
pub mod snapper;

use snapper::{introspect, Inbound, Outcome, State};

pub const CLASS_NAME: &str = "avgsnapper";

//the variant ext_main registers
#[cfg(not(feature = "proxy"))]
pub type Loaded = inlets::AvgSnapper;
#[cfg(feature = "proxy")]
pub type Loaded = proxy::AvgSnapper;

/// Register the class and announce it on the console.
pub fn load() -> MaxResult<()> {
    MaxObjWrapper::<Loaded>::register()?;
    median::post!("{} object loaded...", CLASS_NAME);
    Ok(())
}

median::ext_main! {
    if let Err(e) = load() {
        median::error!("{}: failed to register: {}", CLASS_NAME, e);
    }
}

pub(crate) fn announce(obj: &ObjectHeader) {
    median::object_post!(obj, "new {} object instance added to patch...", CLASS_NAME);
}

/// Print a list the way it arrived, before it is stored.
///
/// With `via`, the inlet it came in on is reported between the count and the atoms.
pub(crate) fn post_list(
    obj: &ObjectHeader,
    sel: &SymbolRef,
    atoms: &[Atom],
    via: Option<usize>,
) {
    let mut lines = introspect(sel, atoms);
    if let Some(inlet) = via {
        //after the selector and count lines
        lines.insert(2, format!("list came in via inlet {}", inlet));
    }
    for line in lines {
        median::object_post!(obj, "{}", line);
    }
}

/// Apply a message and carry out the outcome.
pub(crate) fn route(obj: &ObjectHeader, out: &OutInt, state: &State, inlet: usize, msg: Inbound) {
    match state.apply(inlet, msg) {
        Outcome::Emit(v) => {
            if let Err(e) = out.send(v) {
                median::object_error!(obj, "failed to send {}: {}", v, e);
            }
        }
        Outcome::Stored => (),
        Outcome::Ignored => {
            median::object_post!(obj, "{} in inlet {} ignored", msg.selector(), inlet)
        }
    }
}
