use crate::Machine;
use crate::demo::{SplitName, increment, overwrite_counter, split, sum, swap};
use handoff_library::Host;
use handoff_library::diag::{DiagResult, Warned};

/// Run every demonstration once, in a fixed order with fixed inputs.
pub fn run(mx: &mut Machine) -> DiagResult<()> {
    // A by-value increment reaches the caller's slot only when the
    // caller writes the returned value back.
    mx.define_mut("x", 8);
    let x = mx.read_int("x")?;
    let x = increment(mx, x)?; // 9
    mx.assign("x", x)?;

    // Two strings exchange places by coming back in the opposite order.
    mx.define_mut("y", "Penn");
    mx.define_mut("z", "Teller");
    let (y, z) = swap(mx.read_str("y")?, mx.read_str("z")?);
    mx.assign("y", y)?;
    mx.assign("z", z)?;
    mx.print_binding("y")?; // Teller
    mx.print_binding("z")?; // Penn

    // Slots declared without a value must be assigned before they are
    // read back.
    let name = "Stevie Ray Vaughan";
    mx.declare("first");
    mx.declare("last");
    let parts = split(name)?;
    mx.assign("first", parts.first)?;
    mx.assign("last", parts.last)?;
    mx.print_binding("first")?; // Stevie Ray
    mx.print_binding("last")?; // Vaughan

    // The split result can also land directly in fresh locals.
    let SplitName { first, last } = split(name)?;
    mx.println(first)?; // Stevie Ray
    mx.println(last)?; // Vaughan

    // Only the first half is wanted here; the rest is never captured.
    let SplitName { first, .. } = split(name)?;
    mx.println(first)?; // Stevie Ray

    overwrite_counter(mx)?; // 0, then 1

    // The same total, whether the integers arrive one by one or as one
    // prebuilt sequence.
    let total = sum([1, 2, 3, 4]);
    mx.println(total)?; // 10

    let numbers = vec![1, 2, 3, 4];
    let total = sum(numbers);
    mx.println(total)?; // 10

    Ok(())
}

/// Run the demonstration sequence on a fresh machine, keeping whatever
/// warnings it produced along the way.
pub fn run_collecting(host: &dyn Host) -> Warned<DiagResult<()>> {
    let mut mx = Machine::new(host);
    let value = run(&mut mx);
    Warned::new(value).with_warnings(mx.take_warnings())
}
