// Copyright (c) 2025 - Cowboy AI, LLC.

//! Call-scoped warning capture
//!
//! Warnings are `tracing` events at `Level::WARN`. While a decorated call
//! runs, a [`WarningCapture`] subscriber is installed as the thread-local
//! default dispatcher. It counts and swallows warning events and forwards
//! everything else to whichever dispatcher was active before the call.
//!
//! The region is released by `tracing`'s scope guard on every exit path,
//! unwinding included, and it never touches the global dispatcher, so calls
//! running on other threads cannot see each other's warnings. When capture
//! regions nest, the innermost one owns the warnings raised inside it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::dispatcher::{self, Dispatch};
use tracing::level_filters::LevelFilter;
use tracing::span::{Attributes, Id, Record};
use tracing::subscriber::{Interest, Subscriber};
use tracing::{Event, Level, Metadata};
use tracing_core::span::Current;

/// Subscriber that counts warnings and forwards the rest
pub(crate) struct WarningCapture {
    forward: Dispatch,
    warnings: Arc<AtomicUsize>,
}

impl WarningCapture {
    fn new(forward: Dispatch, warnings: Arc<AtomicUsize>) -> Self {
        Self { forward, warnings }
    }
}

fn is_warning(metadata: &Metadata<'_>) -> bool {
    metadata.is_event() && *metadata.level() == Level::WARN
}

impl Subscriber for WarningCapture {
    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        if is_warning(metadata) {
            Interest::always()
        } else {
            self.forward.register_callsite(metadata)
        }
    }

    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        is_warning(metadata) || self.forward.enabled(metadata)
    }

    // `Dispatch` does not expose the forward's hint; stay unfiltered.
    fn max_level_hint(&self) -> Option<LevelFilter> {
        None
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        self.forward.new_span(span)
    }

    fn record(&self, span: &Id, values: &Record<'_>) {
        self.forward.record(span, values)
    }

    fn record_follows_from(&self, span: &Id, follows: &Id) {
        self.forward.record_follows_from(span, follows)
    }

    fn event(&self, event: &Event<'_>) {
        if is_warning(event.metadata()) {
            self.warnings.fetch_add(1, Ordering::Relaxed);
        } else {
            self.forward.event(event)
        }
    }

    fn enter(&self, span: &Id) {
        self.forward.enter(span)
    }

    fn exit(&self, span: &Id) {
        self.forward.exit(span)
    }

    fn clone_span(&self, id: &Id) -> Id {
        self.forward.clone_span(id)
    }

    fn try_close(&self, id: Id) -> bool {
        self.forward.try_close(id)
    }

    fn current_span(&self) -> Current {
        self.forward.current_span()
    }
}

/// Result of running a closure inside a capture region
#[derive(Debug)]
pub(crate) struct Captured<R> {
    pub(crate) value: R,
    pub(crate) warnings: usize,
}

/// Run `f` with warnings captured for exactly the duration of the call
///
/// A panic in `f` unwinds straight through; the previous dispatcher is
/// restored before the panic leaves this function.
pub(crate) fn capture_warnings<R, F>(f: F) -> Captured<R>
where
    F: FnOnce() -> R,
{
    let warnings = Arc::new(AtomicUsize::new(0));
    let forward = dispatcher::get_default(Dispatch::clone);
    let capture = Dispatch::new(WarningCapture::new(forward, Arc::clone(&warnings)));

    let value = dispatcher::with_default(&capture, f);

    Captured {
        value,
        warnings: warnings.load(Ordering::Relaxed),
    }
}
