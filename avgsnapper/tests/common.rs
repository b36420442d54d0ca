#![allow(dead_code)]

//! Checks that hold for either inlet variant, each test binary runs them against its own.

use avgsnapper::snapper::{ASSIST_LEFT, ASSIST_MIDDLE, ASSIST_OUTLET, ASSIST_RIGHT};
use median::{
    atom,
    error::MaxError,
    host::ObjectId,
    object::{MaxObj, ObjBox},
    patcher::{Level, Patcher},
    symbol::SymbolRef,
    wrapper::{AssistIo, MaxObjWrapped, MaxObjWrapper},
};
use std::convert::TryFrom;
use std::sync::Arc;

pub type Obj<T> = ObjBox<MaxObjWrapper<T>>;

/// A fresh host that also receives the process wide console.
pub fn setup() -> Arc<Patcher> {
    let patcher = Patcher::new();
    median::set_console(patcher.clone());
    patcher
}

pub fn create<T: MaxObjWrapped<T>>(p: &Arc<Patcher>) -> Obj<T> {
    MaxObjWrapper::<T>::register().unwrap();
    MaxObjWrapper::<T>::new_noargs(p.clone()).unwrap()
}

pub fn id<T: MaxObjWrapped<T>>(o: &Obj<T>) -> ObjectId {
    o.max_obj().id()
}

/// What came out of the outlet.
pub fn outputs<T: MaxObjWrapped<T>>(p: &Patcher, o: &Obj<T>) -> Vec<i64> {
    p.sent_ints(id(o), 0)
}

pub fn scenario_a<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(0, 3);
    assert_eq!(vec![3], outputs(&p, &o));
}

pub fn scenario_b<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(1, 5);
    o.int(0, 7);
    assert_eq!(vec![12], outputs(&p, &o));
}

pub fn scenario_c<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.bang(0);
    assert_eq!(vec![0], outputs(&p, &o));
}

pub fn scenario_d<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(1, 10);
    o.bang(0);
    o.int(0, 4);
    assert_eq!(vec![10, 14], outputs(&p, &o));
}

pub fn scenario_e<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.list(2, &atom::parse("1 2.5 foo").unwrap());
    assert!(outputs(&p, &o).is_empty());
    let posts = p.posts_from(id(&o));
    for line in &[
        "message selector is list",
        "there are 3 arguments",
        "1: 1",
        "2: 2.50",
        "3: foo",
    ] {
        assert!(posts.contains(&line.to_string()), "{:?} not in {:?}", line, posts);
    }
}

pub fn scenario_f<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(0, -2);
    o.int(1, -3);
    o.bang(0);
    assert_eq!(vec![-2, -5], outputs(&p, &o));
}

pub fn left_int_then_bang_repeats<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(1, 6);
    o.int(0, 9);
    o.bang(0);
    o.bang(0);
    assert_eq!(vec![15, 15, 15], outputs(&p, &o));
}

pub fn middle_is_silent<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    for v in &[1, -1, i64::MAX, 0] {
        o.int(1, *v);
    }
    assert!(outputs(&p, &o).is_empty());
    o.bang(0);
    assert_eq!(vec![0], outputs(&p, &o));
}

pub fn lists_leave_operands_alone<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(0, 2);
    o.int(1, 3);
    let atoms = atom::parse("100 200").unwrap();
    for inlet in 0..3 {
        o.list(inlet, &atoms);
    }
    o.list(1, &[]);
    o.bang(0);
    assert_eq!(vec![2, 5], outputs(&p, &o));
}

pub fn int_on_right_does_nothing<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(2, 9);
    o.bang(1);
    o.bang(2);
    assert!(outputs(&p, &o).is_empty());
    o.bang(0);
    assert_eq!(vec![0], outputs(&p, &o));
}

pub fn sum_wraps<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(1, 1);
    o.int(0, i64::MAX);
    assert_eq!(vec![i64::MIN], outputs(&p, &o));
}

pub fn layout<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    assert_eq!(vec![0, 1, 2], p.inlet_order(id(&o)));
    assert_eq!(
        vec![Some(SymbolRef::try_from("int").unwrap())],
        p.outlets(id(&o))
    );
    assert_eq!(
        vec!["new avgsnapper object instance added to patch...".to_string()],
        p.posts_from(id(&o))
    );
}

pub fn assist<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    let mut s = String::new();
    for (i, text) in [ASSIST_LEFT, ASSIST_MIDDLE, ASSIST_RIGHT].iter().enumerate() {
        o.assist(AssistIo::Inlet, i, &mut s);
        assert_eq!(*text, s);
    }
    o.assist(AssistIo::Outlet, 0, &mut s);
    assert_eq!("Sum of All Inlets", s);
    assert_eq!(ASSIST_OUTLET, s);
    assert_eq!("Left Operand (Causes Output)", ASSIST_LEFT);
    assert_eq!("Middle Operand (Added to Left)", ASSIST_MIDDLE);
    assert_eq!("List to process", ASSIST_RIGHT);
}

pub fn assist_from_a_patch_is_refused<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    p.clear();
    let assist = SymbolRef::try_from("assist").unwrap();
    o.anything(0, &assist, &atom::parse("1 0").unwrap());
    let lines = p.console();
    assert_eq!(1, lines.len());
    assert_eq!(Level::Error, lines[0].level);
    assert!(outputs(&p, &o).is_empty());
}

pub fn allocation_failure<T: MaxObjWrapped<T>>() {
    MaxObjWrapper::<T>::register().unwrap();
    let p = Patcher::with_capacity(0);
    match MaxObjWrapper::<T>::new_noargs(p.clone()) {
        Err(e) => assert_eq!(MaxError::OutOfMem, e),
        Ok(_) => panic!("allocated past capacity"),
    }
    assert_eq!(0, p.object_count());
    assert!(p.console().is_empty());
}

pub fn teardown<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let a = create::<T>(&p);
    let b = create::<T>(&p);
    a.list(2, &atom::parse("1 2 3").unwrap());
    let (ida, idb) = (id(&a), id(&b));
    std::mem::drop(a);
    assert!(p.sent(ida, 0).is_empty());
    assert_eq!(1, p.object_count());
    assert!(p.inlet_order(ida).is_empty());
    assert_eq!(vec![0, 1, 2], p.inlet_order(idb));
    std::mem::drop(b);
    assert!(p.sent(idb, 0).is_empty());
    assert_eq!(0, p.object_count());
}

pub fn refused_send_is_reported<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let o = create::<T>(&p);
    o.int(1, 2);
    p.clear();
    p.set_send_limit(Some(0));
    o.bang(0);
    let errors: Vec<String> = p
        .console()
        .into_iter()
        .filter(|l| l.level == Level::Error)
        .map(|l| l.text)
        .collect();
    assert_eq!(vec!["failed to send 2: stack overflow".to_string()], errors);
    assert!(outputs(&p, &o).is_empty());

    p.set_send_limit(None);
    o.bang(0);
    assert_eq!(vec![2], outputs(&p, &o));
}

pub fn instances_are_independent<T: MaxObjWrapped<T>>() {
    let p = Patcher::new();
    let a = create::<T>(&p);
    let b = create::<T>(&p);
    a.int(1, 100);
    b.int(0, 1);
    a.int(0, 1);
    assert_eq!(vec![101], outputs(&p, &a));
    assert_eq!(vec![1], outputs(&p, &b));
}
