mod benchmark;
mod digits;
mod error;
mod radix_key;
mod sort;

pub use benchmark::*;
pub use digits::*;
pub use error::*;
pub use radix_key::*;
pub use sort::*;
