pub mod envelope;
pub mod item;

pub use envelope::*;
pub use item::*;
