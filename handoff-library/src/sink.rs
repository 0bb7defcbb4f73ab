use crate::diag::Diagnostic;
use ecow::EcoVec;

/// Collects the warnings emitted while a machine runs.
#[derive(Debug, Default, Clone)]
pub struct Sink {
    warnings: EcoVec<Diagnostic>,
}

impl Sink {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn warn(&mut self, warning: Diagnostic) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> EcoVec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }
}
