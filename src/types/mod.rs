pub mod allocation;
pub mod request;

pub use allocation::{AllocationMetadata, AllocationResult, SelectedItem};
pub use request::{CategoryRequest, ParseError, ParsedRequest};
