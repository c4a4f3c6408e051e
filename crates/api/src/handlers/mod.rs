pub mod callback;
pub mod donations;
