use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_ENABLED.load(Ordering::Relaxed)
}

// Gated diagnostics for price resolution: with --verbose the resolver prints
// which rule produced (or refused) each price
#[macro_export]
macro_rules! trace_println {
    ($($arg:tt)*) => {
        if $crate::trace::is_verbose() {
            println!($($arg)*);
        }
    };
}
