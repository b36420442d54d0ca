use crate::host::Console;
use crate::symbol::SymbolRef;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::sync::Arc;

/// Symbols that the framework uses over and over.
pub struct CommonSymbols {
    pub s_nothing: SymbolRef,
    pub s_bang: SymbolRef,
    pub s_int: SymbolRef,
    pub s_float: SymbolRef,
    pub s_list: SymbolRef,
    pub s_anything: SymbolRef,
    pub s_assist: SymbolRef,
    pub s_box: SymbolRef,
    pub s_nobox: SymbolRef,
}

lazy_static! {
    static ref COMMON: CommonSymbols = CommonSymbols {
        s_nothing: SymbolRef::gensym(""),
        s_bang: SymbolRef::gensym("bang"),
        s_int: SymbolRef::gensym("int"),
        s_float: SymbolRef::gensym("float"),
        s_list: SymbolRef::gensym("list"),
        s_anything: SymbolRef::gensym("anything"),
        s_assist: SymbolRef::gensym("assist"),
        s_box: SymbolRef::gensym("box"),
        s_nobox: SymbolRef::gensym("nobox"),
    };
    static ref CONSOLE: RwLock<Arc<dyn Console>> = RwLock::new(Arc::new(StdConsole));
}

/// Get a reference to the common symbols table
pub fn common_symbols() -> &'static CommonSymbols {
    &COMMON
}

/// Replace the console that `post` and `error` write to.
pub fn set_console(console: Arc<dyn Console>) {
    *CONSOLE.write() = console;
}

/// Post a message to the console.
pub fn post<T: AsRef<str>>(msg: T) {
    let console = CONSOLE.read().clone();
    console.post(msg.as_ref());
}

/// Post an error to the console.
pub fn error<T: AsRef<str>>(msg: T) {
    let console = CONSOLE.read().clone();
    console.error(msg.as_ref());
}

//used until a host installs its own console
struct StdConsole;

impl Console for StdConsole {
    fn post(&self, msg: &str) {
        println!("{}", msg);
    }
    fn error(&self, msg: &str) {
        eprintln!("{}", msg);
    }
}
