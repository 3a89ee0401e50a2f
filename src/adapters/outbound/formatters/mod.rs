/// Formatter adapters for the supported output formats
mod json_formatter;
mod msbuild_formatter;

pub use json_formatter::JsonFormatter;
pub use msbuild_formatter::MsBuildFormatter;
