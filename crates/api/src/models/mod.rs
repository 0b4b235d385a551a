pub mod compilation;
pub mod flags;

pub use compilation::*;
pub use flags::*;
