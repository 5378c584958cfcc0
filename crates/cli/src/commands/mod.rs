pub mod coverage;
pub mod drift;
pub mod regression;
pub mod rules;
pub mod util;

pub use coverage::*;
pub use drift::*;
pub use regression::*;
pub use rules::*;
pub use util::*;
