pub mod holiday_service;
pub mod pagination;
pub mod patch;
pub mod validation;

pub use holiday_service::*;
pub use pagination::*;
pub use patch::*;
pub use validation::*;
