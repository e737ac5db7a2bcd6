pub mod converter;
pub mod error;
pub mod report;
pub mod rules;
pub mod samples;
pub mod sniffer;
pub mod syntax;
pub mod utils;

// Re-export common items
pub use converter::{convert, convert_with_report, ConversionRequest, ConversionResult, Converter};
pub use error::{ConvertError, Result};
pub use samples::sample;
pub use sniffer::detect_syntax;
pub use syntax::Syntax;
