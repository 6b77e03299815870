//! End-to-end flows through the contract shell.

pub mod end_to_end;
pub mod persistence;
