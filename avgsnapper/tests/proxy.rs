mod common;

use avgsnapper::proxy::AvgSnapper;
use common::*;
use median::{
    atom::{self, AtomType},
    host::InletKind,
    patcher::{Level, Patcher},
    wrapper::WrapperWrapped,
};

#[test]
fn scenario_a() {
    common::scenario_a::<AvgSnapper>();
}

#[test]
fn scenario_b() {
    common::scenario_b::<AvgSnapper>();
}

#[test]
fn scenario_c() {
    common::scenario_c::<AvgSnapper>();
}

#[test]
fn scenario_d() {
    common::scenario_d::<AvgSnapper>();
}

#[test]
fn scenario_e() {
    common::scenario_e::<AvgSnapper>();
}

#[test]
fn scenario_f() {
    common::scenario_f::<AvgSnapper>();
}

#[test]
fn left_int_then_bang_repeats() {
    common::left_int_then_bang_repeats::<AvgSnapper>();
}

#[test]
fn middle_is_silent() {
    common::middle_is_silent::<AvgSnapper>();
}

#[test]
fn lists_leave_operands_alone() {
    common::lists_leave_operands_alone::<AvgSnapper>();
}

#[test]
fn int_on_right_does_nothing() {
    common::int_on_right_does_nothing::<AvgSnapper>();
}

#[test]
fn sum_wraps() {
    common::sum_wraps::<AvgSnapper>();
}

#[test]
fn layout() {
    common::layout::<AvgSnapper>();
}

#[test]
fn assist() {
    common::assist::<AvgSnapper>();
}

#[test]
fn assist_from_a_patch_is_refused() {
    common::assist_from_a_patch_is_refused::<AvgSnapper>();
}

#[test]
fn allocation_failure() {
    common::allocation_failure::<AvgSnapper>();
}

#[test]
fn teardown() {
    common::teardown::<AvgSnapper>();
}

#[test]
fn instances_are_independent() {
    common::instances_are_independent::<AvgSnapper>();
}

#[test]
fn refused_send_is_reported() {
    common::refused_send_is_reported::<AvgSnapper>();
}

#[test]
fn extra_inlets_are_proxies() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    for i in 1..3 {
        assert_eq!(Some(InletKind::Proxy), p.inlet_kind(id(&o), i));
    }
}

#[test]
fn operands_follow_their_inlet() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    o.int(0, 1);
    o.int(1, 2);
    assert_eq!(1, o.wrapped().state().left());
    assert_eq!(2, o.wrapped().state().middle());
}

#[test]
fn reports_the_inlet() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    p.clear();
    o.int(1, 5);
    o.list(2, &atom::parse("1 2.5").unwrap());
    assert_eq!(
        vec![
            "int came in via inlet 1",
            "message selector is list",
            "there are 2 arguments",
            "list came in via inlet 2",
            "1: 1",
            "2: 2.50",
        ],
        p.posts_from(id(&o))
    );
    assert!(p.console().iter().all(|l| l.level == Level::Post));
}

#[test]
fn list_is_kept_after_the_sender_lets_go() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    let atoms = atom::parse("foo 3").unwrap();
    o.list(1, &atoms);
    let expected = atoms.clone();
    std::mem::drop(atoms);
    assert_eq!(expected, o.wrapped().state().right_list());
    assert_eq!(0, o.wrapped().state().middle());
}

#[test]
fn unknown_atom_types_are_named() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    let atoms = atom::parse("foo ,").unwrap();
    assert_eq!(AtomType::Comma, atoms[1].get_type());
    o.list(2, &atoms);
    assert!(p
        .posts_from(id(&o))
        .contains(&"2: unknown atom type (11)".to_string()));
}

#[test]
fn int_on_right_is_logged() {
    let p = Patcher::new();
    let o = create::<AvgSnapper>(&p);
    p.clear();
    o.int(2, 9);
    assert_eq!(
        vec!["int came in via inlet 2", "int in inlet 2 ignored"],
        p.posts_from(id(&o))
    );
}
