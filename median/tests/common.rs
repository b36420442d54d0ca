#![allow(dead_code)]

use median::patcher::Patcher;
use std::sync::Arc;

/// A fresh host that also receives the process wide console.
pub fn setup() -> Arc<Patcher> {
    let patcher = Patcher::new();
    median::set_console(patcher.clone());
    patcher
}
