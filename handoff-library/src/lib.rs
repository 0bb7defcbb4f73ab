pub mod diag;
pub mod foundations;
pub mod host;
pub mod sink;

pub use diag::{DiagResult, Diagnostic};
pub use foundations::{Binding, BindingKind, IntoValue, Scope, Value};
pub use host::{Host, StdioHost};
pub use sink::Sink;
