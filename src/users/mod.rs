//! The users feature: the HTTP client for the `/users` endpoints, the record
//! type it exchanges, and the conversion of legacy exports into create
//! payloads.

pub mod client;
pub mod legacy;
pub mod types;

pub use client::UserApi;
pub use types::User;
