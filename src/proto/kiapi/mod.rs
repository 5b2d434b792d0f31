//! Mirror of the host's `kiapi` protobuf packages.

pub mod board;
pub mod common;
