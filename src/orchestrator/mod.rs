// Fri Oct 16 2026 - Alex

pub mod discovery;
pub mod coordinator;
pub mod aggregator;

pub use discovery::SourceDiscovery;
pub use coordinator::CheckCoordinator;
pub use aggregator::ResultAggregator;
