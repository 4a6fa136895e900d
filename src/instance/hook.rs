//! Captures panics into `error.log` without an explicit `error()` call.
//! Panicking notification tasks land here too.

use crate::fmt::{Formatter, TIMESTAMP_FORMAT};
use crate::internal;
use crate::level::Level;
use crate::output::FileOutput;
use crate::record::ErrorPayload;
use chrono::Local;
use std::backtrace::Backtrace;
use std::panic::{self, PanicHookInfo};
use std::sync::{Arc, OnceLock};

static HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// Chains onto the existing hook. Only the first call per process installs anything.
pub(super) fn install(errors: Arc<FileOutput>) {
    if HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let body = panic_body(info, &ErrorPayload::from_backtrace(&Backtrace::capture()));
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        // Closed after `end()`; nothing left to record into.
        let _ = errors.append(&Formatter::line(&timestamp, Level::Error, &body));
        previous(info);
    }));
    internal::debug("INSTANCE", "Panic hook installed");
}

fn panic_body(info: &PanicHookInfo<'_>, trace: &ErrorPayload) -> String {
    let location = info.location().map_or_else(
        || "unknown location".to_string(),
        |loc| format!("{}:{}", loc.file(), loc.line()),
    );
    let payload = payload_text(info.payload());

    match trace.trace_text() {
        Some(trace) => format!("panicked at {location}: {payload}\n{trace}"),
        None => format!("panicked at {location}: {payload}"),
    }
}

fn payload_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
