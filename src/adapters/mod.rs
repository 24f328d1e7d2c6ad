//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Bearer token validation (JWT, mock)
//! - `chatbot` - The external debate chatbot (HTTP, scripted)
//! - `http` - Axum REST API
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod auth;
pub mod chatbot;
pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{api_router, AppState};
