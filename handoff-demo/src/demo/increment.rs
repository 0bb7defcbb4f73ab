use crate::Machine;
use handoff_library::diag::DiagResult;

/// Add one to `value` and print the result.
///
/// The caller keeps ownership of its own storage: it receives the new
/// value back and decides whether to write it anywhere.
pub fn increment(mx: &mut Machine, value: i64) -> DiagResult<i64> {
    let value = value + 1;
    mx.println(value)?;
    Ok(value)
}
