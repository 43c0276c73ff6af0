//! Implementations of provider ports.

pub mod outbound;
