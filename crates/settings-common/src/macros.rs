/// Convenience macro to emit a [`crate::diagnostics::Warning`] carrying the
/// call site location. The category defaults to
/// [`crate::diagnostics::WarningCategory::User`] and can be overridden.
/// Example
/// ```rust
/// use settings_common::emit_warning;
/// use settings_common::diagnostics::WarningCategory;
///
/// emit_warning!("branching ratio {} is above 1", 1.2);
/// emit_warning!(WarningCategory::Config ; "missing section [{}]", "lattice");
/// ```
#[macro_export]
macro_rules! emit_warning {
    ($category: expr ; $s: literal $(, $v: expr)*) => {
        $crate::diagnostics::emit($crate::diagnostics::Warning::new(
            $category,
            format!($s $(, $v)*),
            file!(),
            line!(),
        ))
    };
    ($s: literal $(, $v: expr)*) => {
        $crate::emit_warning!($crate::diagnostics::WarningCategory::User ; $s $(, $v)*)
    };
}
