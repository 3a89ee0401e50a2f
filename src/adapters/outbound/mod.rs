/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod document;
pub mod filesystem;
pub mod formatters;
