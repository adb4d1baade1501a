mod resorts;
mod spark;
mod suggest;

pub use resorts::*;
pub use spark::*;
pub use suggest::*;
