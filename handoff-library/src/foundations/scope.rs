use crate::diag::{DiagResult, StrResult, bail, eco_format, warning};
use crate::sink::Sink;
use crate::{IntoValue, Value};
use ecow::EcoString;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// A set of named storage locations.
///
/// Iteration order is insertion order, so dumping a scope lists its
/// bindings in the order the program created them.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    map: IndexMap<EcoString, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn bind(&mut self, name: EcoString, binding: Binding) -> &mut Binding {
        match self.map.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(binding);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(binding),
        }
    }

    pub fn get(&self, name: &str) -> StrResult<&Binding> {
        self.map
            .get(name)
            .ok_or_else(|| eco_format!("unbound variable: {name}"))
    }

    pub fn get_mut(&mut self, name: &str) -> StrResult<&mut Binding> {
        self.map
            .get_mut(name)
            .ok_or_else(|| eco_format!("unbound variable: {name}"))
    }
}

/// One storage location: a value plus the rules for touching it.
#[derive(Debug, Clone)]
pub struct Binding {
    value: Value,
    kind: BindingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Immutable,
    Mutable,
    Uninitialized,
    UninitializedMutable,
}

impl Binding {
    pub fn new(value: impl IntoValue) -> Self {
        Self {
            kind: BindingKind::Immutable,
            value: value.into_value(),
        }
    }

    pub fn new_mutable(value: impl IntoValue) -> Self {
        Self {
            kind: BindingKind::Mutable,
            value: value.into_value(),
        }
    }

    /// A slot that holds no value yet. It must be written before its
    /// first checked read.
    pub fn uninitialized() -> Self {
        Self {
            kind: BindingKind::Uninitialized,
            value: Value::unit(),
        }
    }

    pub fn uninitialized_mutable() -> Self {
        Self {
            kind: BindingKind::UninitializedMutable,
            value: Value::unit(),
        }
    }

    pub fn with_kind(self, kind: BindingKind) -> Self {
        Self { kind, ..self }
    }

    pub fn read(&self) -> &Value {
        &self.value
    }

    /// Read the value behind the binding.
    ///
    /// A warning is emitted to the sink if the variable was not yet
    /// initialized.
    pub fn read_checked(&self, name: &str, sink: &mut Sink) -> &Value {
        if self.is_uninitialized() {
            sink.warn(warning!(
                "read an uninitialised variable `{name}`";
                hint: "uninitialised variables are always `()`";
            ));
        }
        self.read()
    }

    /// Get a mutable reference to the value behind the binding.
    ///
    /// Returns an error if the value is not mutable.
    ///
    /// If the binding was not yet initialized, its kind is updated to the
    /// corresponding initialized kind.
    pub fn write(&mut self, name: &str) -> DiagResult<&mut Value> {
        match self.kind {
            BindingKind::Immutable => bail!(
                "cannot assign to the immutable variable `{name}` more than once";
                hint: "declare it as mutable to allow reassignment"
            ),
            BindingKind::Mutable => Ok(&mut self.value),
            BindingKind::Uninitialized => {
                self.kind = BindingKind::Immutable;
                Ok(&mut self.value)
            }
            BindingKind::UninitializedMutable => {
                self.kind = BindingKind::Mutable;
                Ok(&mut self.value)
            }
        }
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(
            self.kind,
            BindingKind::Uninitialized | BindingKind::UninitializedMutable
        )
    }

    pub fn kind(&self) -> BindingKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_initialises_an_immutable_slot() {
        let mut binding = Binding::uninitialized();
        assert_eq!(binding.kind(), BindingKind::Uninitialized);

        *binding.write("a").unwrap() = Value::Int(4);
        assert_eq!(binding.kind(), BindingKind::Immutable);
        assert_eq!(binding.read(), &Value::Int(4));

        let errors = binding.write("a").unwrap_err();
        assert_eq!(
            errors[0].message,
            "cannot assign to the immutable variable `a` more than once"
        );
    }

    #[test]
    fn mutable_slots_allow_rewrites() {
        let mut binding = Binding::uninitialized_mutable();
        *binding.write("n").unwrap() = Value::Int(1);
        assert_eq!(binding.kind(), BindingKind::Mutable);

        *binding.write("n").unwrap() = Value::Int(2);
        assert_eq!(binding.read(), &Value::Int(2));
    }

    #[test]
    fn immutable_slots_reject_writes() {
        let mut binding = Binding::new(3);
        assert!(binding.write("c").is_err());
        assert_eq!(binding.read(), &Value::Int(3));
    }

    #[test]
    fn checked_reads_warn_until_assigned() {
        let mut sink = Sink::new();
        let mut binding = Binding::uninitialized();

        assert_eq!(binding.read_checked("a", &mut sink), &Value::unit());
        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(
            sink.warnings()[0].message,
            "read an uninitialised variable `a`"
        );

        *binding.write("a").unwrap() = Value::Int(1);
        binding.read_checked("a", &mut sink);
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn unknown_names_are_reported() {
        let scope = Scope::new();
        assert_eq!(scope.get("missing").unwrap_err(), "unbound variable: missing");
    }

    #[test]
    fn rebinding_replaces_the_old_binding() {
        let mut scope = Scope::new();
        scope.bind("a".into(), Binding::new(1));
        scope.bind(
            "a".into(),
            Binding::new("shadowed").with_kind(BindingKind::Mutable),
        );

        let binding = scope.get("a").unwrap();
        assert_eq!(binding.kind(), BindingKind::Mutable);
        assert_eq!(binding.read(), &"shadowed".into_value());
    }
}
