//! Domain building blocks shared by the store and the HTTP layer.
//!
//! Nothing in here touches the database or the network, so every piece can be
//! unit tested in isolation.

pub mod dates;
pub mod error;
pub mod types;
