//! Networking glue between the browser and the shared `api` client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` implements the bottom `Transport` over `gloo-net`; everything above
//! it (auth header, error handling, endpoints) lives in the `api` crate.

pub mod fetch;
