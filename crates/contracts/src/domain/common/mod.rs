//! Types shared by every domain module

pub mod client_error;

pub use client_error::{ClientError, ClientResult};
