//! MCP tool surface.
//!
//! Schemas and dispatch are kept apart so request shapes can be read without the handlers.

mod dispatch;
mod schemas;

pub use dispatch::RgMcpService;
