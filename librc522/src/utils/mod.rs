//! Utilities for librc522: small helpers for hex rendering and poll budgets.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
