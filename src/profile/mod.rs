//! Profile service client module for gRPC communication

mod client;
mod error;
mod traits;

pub use client::ProfileClient;
pub use error::MutationError;
pub use traits::ProfileClientTrait;

#[cfg(test)]
pub use traits::MockProfileClientTrait;
