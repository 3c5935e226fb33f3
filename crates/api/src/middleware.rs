/// Error handling and domain-to-HTTP error mapping
pub mod error_handling;
