// Copyright (c) 2025 - Cowboy AI, LLC.

//! Silent panic absorption
//!
//! A panic caught by a boundary is a normal `Nothing`, not a crash, so it
//! must not reach stderr. The first absorption chains a hook in front of the
//! process panic hook; that hook stays quiet while the panicking thread is
//! inside [`absorb_panic`] and defers to the previous hook otherwise.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::thread;

thread_local! {
    static ABSORBING: Cell<usize> = const { Cell::new(0) };
}

static QUIET_HOOK: Once = Once::new();

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if absorbing_depth() == 0 {
                previous_hook(panic_info);
            }
        }));
    });
}

/// Nesting depth of absorption regions on this thread
pub(crate) fn absorbing_depth() -> usize {
    ABSORBING.try_with(Cell::get).unwrap_or(0)
}

/// Marks the current thread as absorbing until dropped
struct AbsorbGuard;

impl AbsorbGuard {
    fn enter() -> Self {
        ABSORBING.with(|depth| depth.set(depth.get() + 1));
        AbsorbGuard
    }
}

impl Drop for AbsorbGuard {
    fn drop(&mut self) {
        let _ = ABSORBING.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Run `f`, turning a panic into `Err` without printing it
pub(crate) fn absorb_panic<R, F>(f: F) -> thread::Result<R>
where
    F: FnOnce() -> R,
{
    install_quiet_hook();
    let _guard = AbsorbGuard::enter();
    panic::catch_unwind(AssertUnwindSafe(f))
}
