mod counter;
mod increment;
mod split;
mod sum;
mod swap;

pub use counter::overwrite_counter;
pub use increment::increment;
pub use split::{SplitName, split};
pub use sum::sum;
pub use swap::swap;
