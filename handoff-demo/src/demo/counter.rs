use crate::Machine;
use handoff_library::diag::DiagResult;

/// Print the shared counter, overwrite it with 1, and print it again.
///
/// Both reads go through the same machine-wide slot that the write
/// targets, so the second line shows the assignment taking effect on
/// storage the function never owned.
pub fn overwrite_counter(mx: &mut Machine) -> DiagResult<()> {
    let before = mx.counter()?;
    mx.println(before)?;

    mx.set_counter(1)?;

    let after = mx.counter()?;
    mx.println(after)?;

    Ok(())
}
