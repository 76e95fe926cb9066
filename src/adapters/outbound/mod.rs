/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod json;
pub mod network;
pub mod spreadsheet;
