pub mod error;

pub use error::*;

use crate::database::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
