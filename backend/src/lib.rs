//! FitCoach Backend Library
//!
//! This library exposes the backend modules for use in tests and the server binary.

pub mod config;
pub mod error;
pub mod gateway;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
