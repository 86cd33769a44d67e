// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports and read-side services.
//!
//! - [`port`]: Trait definitions that infrastructure implements
//! - [`query`]: The accumulated gallery collection
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer only
//! - Infrastructure implements application ports
//! - The UI consumes ports through injected trait objects

pub mod port;
pub mod query;
