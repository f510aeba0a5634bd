//! HTTP transport for the XChain scoring core.

pub mod gateway;
