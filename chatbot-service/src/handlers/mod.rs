//! HTTP handlers for the chatbot service.

pub mod app;
pub mod chatbot;
pub mod metrics;
