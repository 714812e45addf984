//! HTTP handlers for all web routes.

pub mod api;
pub mod flashcards;
pub mod index;
pub mod qa;
pub mod register;
pub mod system;
