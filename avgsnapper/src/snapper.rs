//! The operands and the rules for updating them.
//!
//! Both inlet variants reduce every delivery to an inlet index and an [`Inbound`] message and hand
//! it to [`State::apply`], so they can't disagree about what a message does.

use median::{
    atom::{Atom, AtomValue},
    common_symbols,
    num::Int64,
    symbol::SymbolRef,
};
use parking_lot::Mutex;

pub const LEFT: usize = 0;
pub const MIDDLE: usize = 1;
pub const RIGHT: usize = 2;

pub const ASSIST_LEFT: &str = "Left Operand (Causes Output)";
pub const ASSIST_MIDDLE: &str = "Middle Operand (Added to Left)";
pub const ASSIST_RIGHT: &str = "List to process";
pub const ASSIST_OUTLET: &str = "Sum of All Inlets";

/// A message, once the inlet it arrived on is known.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Inbound<'a> {
    Bang,
    Int(i64),
    List(&'a [Atom]),
}

impl<'a> Inbound<'a> {
    /// Decode a message by its selector, `None` for selectors the snapper has no use for.
    pub fn from_message(sel: &SymbolRef, atoms: &'a [Atom]) -> Option<Self> {
        let s = common_symbols();
        if *sel == s.s_bang {
            Some(Inbound::Bang)
        } else if *sel == s.s_int {
            Some(Inbound::Int(atoms.first().map(Atom::get_int).unwrap_or(0)))
        } else if *sel == s.s_list {
            Some(Inbound::List(atoms))
        } else {
            None
        }
    }

    /// The selector the message arrived with.
    pub fn selector(&self) -> &'static str {
        match self {
            Inbound::Bang => "bang",
            Inbound::Int(_) => "int",
            Inbound::List(_) => "list",
        }
    }
}

/// What a message did to the state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The sum to send out the outlet.
    Emit(i64),
    /// State changed, nothing to send.
    Stored,
    /// Nothing defined for this message on this inlet.
    Ignored,
}

#[derive(Default)]
pub struct State {
    left: Int64,
    middle: Int64,
    right: Mutex<Vec<Atom>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&self) -> i64 {
        self.left.get()
    }

    pub fn middle(&self) -> i64 {
        self.middle.get()
    }

    /// A copy of the most recently received list.
    pub fn right_list(&self) -> Vec<Atom> {
        self.right.lock().clone()
    }

    /// `left + middle`, wrapping on overflow.
    pub fn sum(&self) -> i64 {
        self.left.get().wrapping_add(self.middle.get())
    }

    /// Apply a message that arrived on `inlet`.
    ///
    /// An int on the left inlet is stored before the sum is taken, so the sum includes it.
    pub fn apply(&self, inlet: usize, msg: Inbound) -> Outcome {
        match (inlet, msg) {
            (LEFT, Inbound::Bang) => Outcome::Emit(self.sum()),
            (LEFT, Inbound::Int(v)) => {
                self.left.set(v);
                Outcome::Emit(self.sum())
            }
            (MIDDLE, Inbound::Int(v)) => {
                self.middle.set(v);
                Outcome::Stored
            }
            (LEFT..=RIGHT, Inbound::List(atoms)) => {
                *self.right.lock() = atoms.to_vec();
                Outcome::Stored
            }
            _ => Outcome::Ignored,
        }
    }
}

/// Format one atom for the console.
pub fn describe(atom: &Atom) -> String {
    match atom.get_value() {
        AtomValue::Int(v) => v.to_string(),
        AtomValue::Float(v) => format!("{:.2}", v),
        AtomValue::Symbol(s) => s.to_string(),
        AtomValue::Other(t) => format!("unknown atom type ({})", t.tag()),
    }
}

/// The console lines for a list: the selector, the count, then each atom numbered from 1.
pub fn introspect(sel: &SymbolRef, atoms: &[Atom]) -> Vec<String> {
    let mut lines = vec![
        format!("message selector is {}", sel),
        format!("there are {} arguments", atoms.len()),
    ];
    lines.extend(
        atoms
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}: {}", i + 1, describe(a))),
    );
    lines
}
