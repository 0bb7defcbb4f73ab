use ecow::{EcoVec, eco_vec};
use std::io::{self, Write};

/// Early-return with a [`DiagResult`].
///
/// Takes the same input as [`error!`], including hints:
///
/// ```ignore
/// bail!("bailing with a {}", "message");
/// bail!(
///     "bailing with a {}", "message";
///     hint: "hint 1";
///     hint: "hint 2";
/// );
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($($tts:tt)*) => {
        return Err(::ecow::eco_vec![$crate::diag::error!($($tts)*)])
    };
}

/// Construct a [`Diagnostic`] with severity `Error`.
///
/// You can attach hints with the `; hint: "..."` syntax.
#[macro_export]
#[doc(hidden)]
macro_rules! __error {
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        $crate::diag::Diagnostic::error(
            $crate::diag::eco_format!($fmt, $($arg),*),
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

/// Construct a [`Diagnostic`] with severity `Warning`.
///
/// You can attach hints with the `; hint: "..."` syntax.
#[macro_export]
#[doc(hidden)]
macro_rules! __warning {
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)? $(;)?
    ) => {
        $crate::diag::Diagnostic::warning(
            $crate::diag::eco_format!($fmt, $($arg),*),
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__bail as bail,
    crate::__error as error,
    crate::__warning as warning,
    ecow::{eco_format, EcoString},
};

pub type DiagResult<T> = Result<T, EcoVec<Diagnostic>>;
pub type StrResult<T> = Result<T, EcoString>;

/// A user-facing message about something that went wrong, or nearly so.
///
/// There is no source text to point into, so a diagnostic carries only a
/// message and optional hints.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: EcoString,
    pub hints: EcoVec<EcoString>,
}

impl Diagnostic {
    pub fn error(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            hints: eco_vec!(),
        }
    }

    pub fn warning(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            hints: eco_vec!(),
        }
    }

    pub fn hint(&mut self, hint: impl Into<EcoString>) {
        self.hints.push(hint.into());
    }

    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint(hint);
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

pub struct Warned<T> {
    pub value: T,
    pub warnings: EcoVec<Diagnostic>,
}

impl<T> Warned<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: eco_vec!(),
        }
    }

    pub fn with_warning(mut self, warning: Diagnostic) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn extend_warnings(&mut self, warnings: EcoVec<Diagnostic>) {
        self.warnings.extend(warnings);
    }

    pub fn with_warnings(mut self, warnings: EcoVec<Diagnostic>) -> Warned<T> {
        self.extend_warnings(warnings);
        self
    }
}

/// Lift a plain string error into a [`DiagResult`].
pub trait IntoDiag<T> {
    fn into_diag(self) -> DiagResult<T>;
}

impl<T, S> IntoDiag<T> for Result<T, S>
where
    S: Into<EcoString>,
{
    fn into_diag(self) -> DiagResult<T> {
        self.map_err(|msg| eco_vec![Diagnostic::error(msg)])
    }
}

/// Render diagnostics as plain lines, hints indented under their parent.
pub fn write_diagnostics(
    errors: &[Diagnostic],
    warnings: &[Diagnostic],
    w: &mut dyn io::Write,
) -> io::Result<()> {
    for diagnostic in errors.iter().chain(warnings) {
        let prefix = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(w, "{prefix}: {}", diagnostic.message)?;
        for hint in &diagnostic.hints {
            writeln!(w, "  hint: {hint}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_macro_collects_hints() {
        let diagnostic = error!(
            "missing {}", "separator";
            hint: "first hint";
            hint: "second {}", "hint"
        );
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "missing separator");
        assert_eq!(diagnostic.hints.as_slice(), ["first hint", "second hint"]);
    }

    #[test]
    fn bail_wraps_a_single_diagnostic() {
        fn fails() -> DiagResult<()> {
            bail!("nope");
        }

        let errors = fails().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "nope");
    }

    #[test]
    fn rendering_indents_hints() {
        let warning = warning!("watch out"; hint: "really");
        let mut buf = Vec::new();
        write_diagnostics(&[], &[warning], &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "warning: watch out\n  hint: really\n"
        );
    }
}
