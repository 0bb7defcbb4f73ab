pub mod scope;
pub mod value;

pub use scope::{Binding, BindingKind, Scope};
pub use value::{IntoValue, Value};
