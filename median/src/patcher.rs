//! An in-process host.
//!
//! `Patcher` keeps everything Max would show you, the console, what came out of each outlet, and
//! how the inlets are laid out, so objects can be driven and inspected without Max running.

use crate::error::{MaxError, MaxResult};
use crate::host::{Console, Host, InletKind, ObjectId};
use crate::outlet::{OutValue, SendError, SendResult};
use crate::symbol::SymbolRef;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Post,
    Error,
}

/// One line in the console.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
    pub level: Level,
    /// Class name of the object that posted, if any.
    pub source: Option<SymbolRef>,
    pub object: Option<ObjectId>,
    pub text: String,
}

impl Display for ConsoleLine {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.source {
            Some(s) => write!(f, "{}: {}", s, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[derive(Default)]
struct Boxed {
    //inlet indices, left to right, the default inlet is always first
    inlets: Vec<(usize, Option<InletKind>)>,
    outlets: Vec<Option<SymbolRef>>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    objects: BTreeMap<ObjectId, Boxed>,
    console: Vec<ConsoleLine>,
    sent: Vec<(ObjectId, usize, OutValue)>,
    //sends past this many are refused
    send_limit: Option<usize>,
}

#[derive(Default)]
pub struct Patcher {
    capacity: Option<usize>,
    state: Mutex<State>,
}

impl Patcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A patcher that fails to allocate once it holds `capacity` objects.
    pub fn with_capacity(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity: Some(capacity),
            state: Mutex::new(State::default()),
        })
    }

    /// Refuse outlet sends, with `SendError::StackOverflow`, once `limit` values have been sent.
    /// `None` lifts the limit.
    pub fn set_send_limit(&self, limit: Option<usize>) {
        self.state.lock().send_limit = limit;
    }

    /// Every line posted so far.
    pub fn console(&self) -> Vec<ConsoleLine> {
        self.state.lock().console.clone()
    }

    /// The text of every line an object posted, in order.
    pub fn posts_from(&self, obj: ObjectId) -> Vec<String> {
        self.state
            .lock()
            .console
            .iter()
            .filter(|l| l.object == Some(obj))
            .map(|l| l.text.clone())
            .collect()
    }

    /// Everything that came out of an outlet, in order.
    pub fn sent(&self, obj: ObjectId, outlet: usize) -> Vec<OutValue> {
        self.state
            .lock()
            .sent
            .iter()
            .filter(|(o, i, _)| *o == obj && *i == outlet)
            .map(|(_, _, v)| v.clone())
            .collect()
    }

    /// The ints that came out of an outlet, in order.
    pub fn sent_ints(&self, obj: ObjectId, outlet: usize) -> Vec<i64> {
        self.sent(obj, outlet)
            .into_iter()
            .filter_map(|v| match v {
                OutValue::Int(i) => Some(i),
                _ => None,
            })
            .collect()
    }

    /// Forget the console and outlet history.
    pub fn clear(&self) {
        let mut g = self.state.lock();
        g.console.clear();
        g.sent.clear();
    }

    /// Inlet indices of an object in the order they appear, left to right.
    pub fn inlet_order(&self, obj: ObjectId) -> Vec<usize> {
        self.state
            .lock()
            .objects
            .get(&obj)
            .map(|b| b.inlets.iter().map(|(i, _)| *i).collect())
            .unwrap_or_default()
    }

    /// The kind of inlet `index`, `None` for the default inlet or one that doesn't exist.
    pub fn inlet_kind(&self, obj: ObjectId, index: usize) -> Option<InletKind> {
        self.state
            .lock()
            .objects
            .get(&obj)
            .and_then(|b| b.inlets.iter().find(|(i, _)| *i == index))
            .and_then(|(_, k)| *k)
    }

    /// The type symbols of an object's outlets, left to right.
    pub fn outlets(&self, obj: ObjectId) -> Vec<Option<SymbolRef>> {
        self.state
            .lock()
            .objects
            .get(&obj)
            .map(|b| b.outlets.clone())
            .unwrap_or_default()
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().objects.len()
    }

    fn push_line(&self, line: ConsoleLine) {
        self.state.lock().console.push(line);
    }
}

impl Console for Patcher {
    fn post(&self, msg: &str) {
        self.push_line(ConsoleLine {
            level: Level::Post,
            source: None,
            object: None,
            text: msg.to_string(),
        });
    }

    fn error(&self, msg: &str) {
        self.push_line(ConsoleLine {
            level: Level::Error,
            source: None,
            object: None,
            text: msg.to_string(),
        });
    }
}

impl Host for Patcher {
    fn object_alloc(&self, _class: &SymbolRef) -> MaxResult<ObjectId> {
        let mut g = self.state.lock();
        if let Some(c) = self.capacity {
            if g.objects.len() >= c {
                return Err(MaxError::OutOfMem);
            }
        }
        g.next_id += 1;
        let id = ObjectId(g.next_id);
        let mut b = Boxed::default();
        b.inlets.push((0, None));
        g.objects.insert(id, b);
        Ok(id)
    }

    fn object_free(&self, obj: ObjectId) {
        self.state.lock().objects.remove(&obj);
    }

    fn object_post(&self, obj: ObjectId, class: &SymbolRef, msg: &str) {
        self.push_line(ConsoleLine {
            level: Level::Post,
            source: Some(*class),
            object: Some(obj),
            text: msg.to_string(),
        });
    }

    fn object_error(&self, obj: ObjectId, class: &SymbolRef, msg: &str) {
        self.push_line(ConsoleLine {
            level: Level::Error,
            source: Some(*class),
            object: Some(obj),
            text: msg.to_string(),
        });
    }

    fn inlet_new(&self, obj: ObjectId, index: usize, kind: InletKind) {
        if let Some(b) = self.state.lock().objects.get_mut(&obj) {
            b.inlets.insert(1, (index, Some(kind)));
        }
    }

    fn inlet_free(&self, obj: ObjectId, index: usize) {
        if let Some(b) = self.state.lock().objects.get_mut(&obj) {
            b.inlets.retain(|(i, _)| *i != index);
        }
    }

    fn outlet_new(&self, obj: ObjectId, type_sym: Option<SymbolRef>) -> usize {
        match self.state.lock().objects.get_mut(&obj) {
            Some(b) => {
                b.outlets.push(type_sym);
                b.outlets.len() - 1
            }
            None => 0,
        }
    }

    fn outlet_send(&self, obj: ObjectId, outlet: usize, value: OutValue) -> SendResult {
        let mut g = self.state.lock();
        if let Some(limit) = g.send_limit {
            if g.sent.len() >= limit {
                return Err(SendError::StackOverflow);
            }
        }
        g.sent.push((obj, outlet, value));
        Ok(())
    }
}
