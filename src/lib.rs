//! # Uzanto (User Management Client)
//!
//! `uzanto` is the client side of a small user-management REST API: one
//! configured HTTP client for the `/users` endpoints, plus the route table
//! that maps navigation paths onto the views consuming those endpoints.
//!
//! ## Client
//!
//! [`users::UserApi`] is built from an explicit [`config::ApiConfig`] and
//! injected wherever requests are made; nothing in this crate reaches for a
//! global client. Payloads for create and update travel as raw JSON objects
//! and responses deserialize into [`users::User`], which carries unknown
//! fields through untouched.
//!
//! ## Configuration
//!
//! The API base URL defaults to `http://localhost:5000/api` and can be
//! overridden with the `UZANTO_API_URL` environment variable or the
//! `--api-url` flag.
//!
//! ## Routes
//!
//! [`routes::resolve`] answers which view a navigation path addresses:
//! `/` renders the user table, `/user/:username` the user detail view with
//! the captured username forwarded as input.

pub mod cli;
pub mod config;
pub mod routes;
pub mod users;
