//! philologic-web: Web front end for PhiloLogic.
//! Provides:
//!   - Philosopher catalog with details, start-learning and module overlays
//!   - Question answering over a context passage
//!   - Study notes to flashcards, kept per session
//!   - Registration form validation
//!   - JSON catalog API and health check

pub mod config;
pub mod generator;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;
pub mod ui;
