//! API Module
//!
//! HTTP handlers and routing for the avatar service.
//!
//! # Endpoints
//! - `GET /api/avatars?accounts=...` - Avatars for the requested accounts
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
