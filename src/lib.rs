#![deny(missing_docs)]

//! Vertex AI generative components for visual workflow hosts.
//!
//! This library wraps Google Cloud Vertex AI text, code, chat, and
//! multimodal models as composable workflow components. Components
//! exchange shared state through an [`ExecutionContext`]: an
//! [`components::Authorize`] component stores the API client, model
//! loaders store the resolved model, and generation components read
//! both back out.

pub mod auth;
pub mod chat;
pub mod client;
pub mod components;
pub mod context;
pub mod error;
pub mod media;
pub mod models;

pub use client::{VertexClient, VertexConfig};
pub use components::Component;
pub use context::ExecutionContext;
pub use error::VertexAiError;
