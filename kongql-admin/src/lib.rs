//! Read-only client for the Kong Admin API.
//!
//! One logical operation per endpoint: a single GET against the configured
//! base address, an HTTP status check, and a typed decode of the JSON body.
//! No retries, no caching, no timeouts beyond the transport defaults — the
//! Admin API is treated as a reliable collaborator, and every failure
//! propagates to the caller untranslated.

pub mod client;

pub use client::AdminClient;
