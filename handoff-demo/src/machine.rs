use ecow::{EcoString, EcoVec, eco_vec};
use handoff_library::diag::{DiagResult, Diagnostic, IntoDiag, error};
use handoff_library::{Binding, Host, IntoValue, Scope, Sink, Value};
use std::fmt::{self, Debug, Display};
use std::io::Write;

/// The name of the one process-wide slot.
pub const COUNTER: &str = "counter";

/// The explicit home of everything the demonstrations touch beyond their
/// own arguments: named local storage, process-wide storage, collected
/// warnings, and the output stream.
pub struct Machine<'a> {
    /// Driver-local bindings.
    pub scope: Scope,
    /// Process-wide slots. These live for as long as the machine does.
    pub statics: Scope,
    pub sink: Sink,
    host: &'a dyn Host,
}

impl<'a> Machine<'a> {
    pub fn new(host: &'a dyn Host) -> Self {
        let mut statics = Scope::new();
        statics.bind(COUNTER.into(), Binding::new_mutable(0));

        Self {
            scope: Scope::new(),
            statics,
            sink: Sink::new(),
            host,
        }
    }

    pub fn define(&mut self, name: &str, value: impl IntoValue) -> &mut Binding {
        self.scope.bind(name.into(), Binding::new(value))
    }

    pub fn define_mut(&mut self, name: &str, value: impl IntoValue) -> &mut Binding {
        self.scope.bind(name.into(), Binding::new_mutable(value))
    }

    /// Declare a slot that has no value yet. It must be assigned before
    /// its first checked read.
    pub fn declare(&mut self, name: &str) -> &mut Binding {
        self.scope.bind(name.into(), Binding::uninitialized())
    }

    pub fn declare_mut(&mut self, name: &str) -> &mut Binding {
        self.scope.bind(name.into(), Binding::uninitialized_mutable())
    }

    pub fn assign(&mut self, name: &str, value: impl IntoValue) -> DiagResult<()> {
        let binding = self.scope.get_mut(name).into_diag()?;
        *binding.write(name)? = value.into_value();
        Ok(())
    }

    pub fn read_int(&self, name: &str) -> DiagResult<i64> {
        self.scope
            .get(name)
            .and_then(|binding| binding.read().as_int())
            .into_diag()
    }

    pub fn read_str(&self, name: &str) -> DiagResult<EcoString> {
        self.scope
            .get(name)
            .and_then(|binding| Ok(binding.read().as_str()?.into()))
            .into_diag()
    }

    /// Print one binding's value as a line of output.
    ///
    /// Reading goes through the initialization check, so printing a slot
    /// that was never assigned leaves a warning in the sink.
    pub fn print_binding(&mut self, name: &str) -> DiagResult<()> {
        let binding = self.scope.get(name).into_diag()?;
        let value = binding.read_checked(name, &mut self.sink).clone();
        self.println(value)
    }

    /// Write one line to the host output stream.
    pub fn println(&mut self, value: impl Display) -> DiagResult<()> {
        self.host
            .write(&|w| writeln!(w, "{value}"))
            .map_err(|err| eco_vec![error!("failed to write output: {err}")])
    }

    pub fn counter(&self) -> DiagResult<i64> {
        self.statics
            .get(COUNTER)
            .and_then(|binding| binding.read().as_int())
            .into_diag()
    }

    pub fn set_counter(&mut self, value: i64) -> DiagResult<()> {
        let binding = self.statics.get_mut(COUNTER).into_diag()?;
        *binding.write(COUNTER)? = Value::Int(value);
        Ok(())
    }

    pub fn take_warnings(&mut self) -> EcoVec<Diagnostic> {
        self.sink.take_warnings()
    }
}

impl Debug for Machine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("scope", &self.scope)
            .field("statics", &self.statics)
            .field("sink", &self.sink)
            .finish()
    }
}
