//! Naxsi whitelist infrastructure: in-memory adapters for the application ports.
pub mod rules;
