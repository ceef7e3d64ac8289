//! Domain types and state machines of the GuardHire marketplace client.
//!
//! Nothing in this crate performs I/O: operations that need the network are
//! split into a `begin`/`prepare` step and a `finish`/`resolve` step that
//! takes the response, so the whole client flow is testable natively.

pub mod domain;
pub mod shared;
pub mod system;
