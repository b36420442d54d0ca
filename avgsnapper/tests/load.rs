mod common;

use avgsnapper::{Loaded, CLASS_NAME};
use median::{
    class::{Class, ClassType},
    patcher::Level,
    wrapper::MaxObjWrapper,
};

#[test]
fn ext_main_registers_and_announces() {
    let p = common::setup();
    assert!(!Class::<Loaded>::exists_in_max(CLASS_NAME, ClassType::Box));
    avgsnapper::ext_main(std::ptr::null_mut());
    assert!(Class::<Loaded>::exists_in_max(CLASS_NAME, ClassType::Box));
    let loaded: Vec<_> = p
        .console()
        .into_iter()
        .filter(|l| l.text == "avgsnapper object loaded...")
        .collect();
    assert_eq!(1, loaded.len());
    assert_eq!(Level::Post, loaded[0].level);
    assert!(loaded[0].source.is_none());

    let o = MaxObjWrapper::<Loaded>::new_noargs(p.clone()).unwrap();
    o.int(1, 2);
    o.int(0, 3);
    assert_eq!(vec![5], common::outputs(&p, &o));
}
