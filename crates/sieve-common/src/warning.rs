//! Sanitizer warnings routed through `tracing`.
//!
//! Provides deduplication to avoid spamming the same warning multiple times
//! when one filter is run over many documents. Used by the sanitizing engine
//! to report recoverable oddities in the input (for example a document that
//! ends inside a suppressed element).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable condition (emits once per unique message)
///
/// Returns `true` if the warning was emitted, `false` if it had already been
/// seen since the last [`clear_warnings`].
///
/// # Example
/// ```
/// use sieve_common::warning::warn_once;
///
/// let _ = warn_once("Sanitizer", "input ended inside a suppressed <div>");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        tracing::warn!(component, "{message}");
    }
    first_time
}

/// Clear all recorded warnings so they can be emitted again
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
