//! HTTP transport implementations

mod ureq_transport;

pub use ureq_transport::UreqTransport;
