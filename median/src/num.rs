//! Numeric type wrappers.
//!
//! Objects only get `&self` in their methods, these give them interior mutability that is also
//! Send and Sync.

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Default, Debug)]
#[repr(transparent)]
pub struct Int64 {
    value: AtomicI64,
}

impl Int64 {
    pub fn new(v: i64) -> Self {
        Self {
            value: AtomicI64::new(v),
        }
    }
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }
}

impl From<i64> for Int64 {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl Clone for Int64 {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl std::fmt::Display for Int64 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
