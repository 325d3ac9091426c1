//! Forecast aggregate: price records, their validation and the remote service port.

pub mod formatting;
pub mod repositories;
pub mod validation;
pub mod value_objects;

pub use formatting::*;
pub use repositories::*;
pub use validation::*;
pub use value_objects::*;
