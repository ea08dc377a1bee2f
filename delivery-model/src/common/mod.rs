pub mod error;
pub mod text;

pub use error::ModelError;
pub use text::{capitalize, pascal_case};
