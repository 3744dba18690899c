pub mod error;
pub mod holiday;
pub mod pagination;

pub use error::*;
pub use holiday::*;
pub use pagination::*;
