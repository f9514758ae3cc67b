//! Mailguard Application Layer
//!
//! Ports (traits over external collaborators) and the use cases that
//! orchestrate them. Nothing here touches the network or the filesystem
//! directly; adapters live in the infrastructure crate.
pub mod ports;
pub mod services;
pub mod use_cases;
