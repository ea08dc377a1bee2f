pub mod config;
pub mod decoder;

pub use config::{ConfigError, DecoderConfig};
pub use decoder::{FragmentDecoder, FragmentRecord};
