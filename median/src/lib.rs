//! # median
//!
//! A small framework for writing Max style externals in Rust: classes, method tables, inlets,
//! outlets and the console, all on top of the [`host::Host`] seam.
pub mod atom;
pub mod builder;
pub mod class;
pub mod error;
pub mod host;
pub mod inlet;
pub mod method;
pub mod num;
pub mod object;
pub mod outlet;
pub mod patcher;
pub mod symbol;
pub mod wrapper;

//re-exports
mod max;
pub use self::max::*;

/// Post a message to the Max console, using the same format as `std::format!`.
#[macro_export]
macro_rules! post {
    ($($arg:tt)*) => {{
        $crate::post(::std::format!($($arg)*))
    }}
}

/// Post an error to the Max console, using the same format as `std::format!`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::error(::std::format!($($arg)*))
    }}
}

/// Post a message to the Max console, associated with the given object, using the same format as `std::format!`.
///
/// # Examples
///
/// Calling inside method for a struct that implements `MaxObj`.
/// ```ignore
/// use median::object::MaxObj;
///
/// pub fn bang(&self) {
///     median::object_post!(self.max_obj(), "from max obj {}", 2084);
/// }
/// ```
#[macro_export]
macro_rules! object_post {
    ($obj:expr, $($arg:tt)*) => {{
        $crate::object::post($obj, ::std::format!($($arg)*))
    }}
}

/// Post an error to the Max console, associated with the given object, using the same format as `std::format!`.
#[macro_export]
macro_rules! object_error {
    ($obj:expr, $($arg:tt)*) => {{
        $crate::object::error($obj, ::std::format!($($arg)*))
    }}
}

/// Create the `ext_main` entry point that the host calls once when it loads the external.
///
/// # Examples
///
/// ```ignore
/// median::ext_main! {
///     let _ = MaxObjWrapper::<Base>::register();
/// }
/// ```
#[macro_export]
macro_rules! ext_main {
    ($($body:tt)*) => {
        #[no_mangle]
        pub extern "C" fn ext_main(_r: *mut ::std::ffi::c_void) {
            $($body)*
        }
    };
}
