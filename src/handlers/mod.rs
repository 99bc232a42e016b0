pub mod common;
pub mod items;

pub use crate::AppState;
