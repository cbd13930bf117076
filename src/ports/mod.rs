//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AlternativeSource` - supplies the candidate alternatives

mod alternative_source;

pub use alternative_source::AlternativeSource;
