use std::cell::RefCell;
use std::fmt::Display;

mod warning;
pub use warning::{Warning, WarningCategory};

thread_local! {
    /// Stack of active collectors; the innermost scope receives the warnings
    /// emitted on this thread.
    static SCOPES: RefCell<Vec<Vec<Warning>>> = RefCell::new(Vec::new());
}

/// Scoped warning collector.
///
/// While a scope is active, warnings emitted on the current thread through
/// [`emit`] are withheld from the default display channel and accumulated in
/// emission order. [`Self::finish`] returns them; dropping the scope without
/// finishing discards them. Scopes nest and must be released in reverse
/// creation order.
pub struct CaptureScope(());

impl CaptureScope {
    pub fn new() -> Self {
        SCOPES.with(|scopes| scopes.borrow_mut().push(Vec::new()));
        Self(())
    }

    /// Releases the scope and returns the warnings captured so far.
    pub fn finish(self) -> Vec<Warning> {
        let warnings = SCOPES.with(|scopes| scopes.borrow_mut().pop()).unwrap_or_default();
        std::mem::forget(self);

        warnings
    }
}

impl Default for CaptureScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CaptureScope {
    fn drop(&mut self) {
        let _ = SCOPES.with(|scopes| scopes.borrow_mut().pop());
    }
}

/// Emits a warning on the current thread.
///
/// The warning lands in the innermost active [`CaptureScope`]; with no scope
/// active it goes straight to the default display channel, a warn-severity
/// log record. See [`crate::emit_warning!`] for the usual entry point.
pub fn emit(warning: Warning) {
    let uncaptured = SCOPES.with(|scopes| match scopes.borrow_mut().last_mut() {
        Some(scope) => {
            scope.push(warning);
            None
        },
        None => Some(warning),
    });

    if let Some(warning) = uncaptured {
        log::warn!(target: module_path!(), "{}", warning.log_line());
    }
}

/// Runs `f` under a fresh [`CaptureScope`] and returns its result together
/// with the warnings it emitted, in emission order.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Warning>) {
    let scope = CaptureScope::new();
    let value = f();

    (value, scope.finish())
}

/// Runs `f` and uniformly logs the diagnostics it produces, without changing
/// its return contract.
///
/// Warnings emitted while `f` runs are withheld from the default display.
/// If `f` fails, the error message is logged at error severity under the
/// given target (the caller's module path) and the error is returned
/// unchanged; warnings raised before the failure are discarded. If `f`
/// succeeds, each captured warning is logged at warn severity under the same
/// target as its [`Warning::log_line`] and then re-emitted with the composed
/// line as its message, so an enclosing [`CaptureScope`] still observes it.
pub fn observe<T, E, F>(target: &str, f: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    let (result, warnings) = capture(f);
    let value = match result {
        Ok(value) => value,
        Err(err) => {
            log::error!(target: target, "{}", err);
            return Err(err);
        },
    };

    for warning in warnings {
        let line = warning.log_line();
        log::warn!(target: target, "{}", line);
        emit(warning.with_message(line));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit_warning;
    use crate::ConfigError;

    #[test]
    fn capture_collects_warnings_in_emission_order() {
        let ((), warnings) = capture(|| {
            emit_warning!("first");
            emit_warning!(WarningCategory::Config ; "second");
        });

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "first");
        assert_eq!(warnings[0].category, WarningCategory::User);
        assert_eq!(warnings[1].message, "second");
        assert_eq!(warnings[1].category, WarningCategory::Config);
    }

    #[test]
    fn emit_warning_records_the_call_site() {
        let ((), warnings) = capture(|| emit_warning!("value {} is out of range", 3));

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "value 3 is out of range");
        assert!(warnings[0].file.ends_with("mod.rs"));
        assert!(warnings[0].line > 0);
    }

    #[test]
    fn inner_scope_shields_the_outer_one() {
        let outer = CaptureScope::new();
        let ((), inner) = capture(|| emit_warning!("inner"));
        emit_warning!("outer");

        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].message, "inner");

        let outer = outer.finish();
        assert_eq!(outer.len(), 1);
        assert_eq!(outer[0].message, "outer");
    }

    #[test]
    fn dropped_scope_discards_its_warnings() {
        let outer = CaptureScope::new();
        {
            let _inner = CaptureScope::new();
            emit_warning!("lost");
        }

        assert!(outer.finish().is_empty());
    }

    #[test]
    fn observe_returns_the_value_unchanged() {
        let result = observe(module_path!(), || Ok::<_, ConfigError>(7));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn observe_reemits_captured_warnings_to_the_enclosing_scope() {
        let scope = CaptureScope::new();
        let result = observe(module_path!(), || {
            emit_warning!("level not found");
            Ok::<_, ConfigError>(())
        });
        assert!(result.is_ok());

        let warnings = scope.finish();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, WarningCategory::User);
        assert!(
            warnings[0].message.starts_with("UserWarning: \"level not found\" in mod.rs, line: "),
            "unexpected composed message: {}",
            warnings[0].message
        );
        assert!(warnings[0].message.ends_with('.'));
    }

    #[test]
    fn observe_propagates_the_error_verbatim() {
        let result: Result<(), ConfigError> = observe(module_path!(), || Err(ConfigError::new("bad value")));
        assert_eq!(result.unwrap_err().to_string(), "bad value");
    }

    #[test]
    fn observe_discards_warnings_on_the_error_path() {
        let scope = CaptureScope::new();
        let result: Result<(), ConfigError> = observe(module_path!(), || {
            emit_warning!("about to fail");
            Err(ConfigError::new("boom"))
        });

        assert!(result.is_err());
        assert!(scope.finish().is_empty(), "Error path should not re-emit warnings");
    }
}
