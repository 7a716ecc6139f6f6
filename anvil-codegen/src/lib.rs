//! Template rendering and generation orchestration for Anvil.
//!
//! # Module Organization
//!
//! - [`source`] - Field sources and their providers (FieldSource, FieldSourceResolver, ...)
//! - [`delegate`] - Request orchestration (Delegate, GenerateRequest)
//! - [`report`] - Outcome messages (MessageSink, Message)
//! - [`routes`] - Route registry patching (RouteRegistry)
//! - [`testing`] - Fakes and fixtures (feature-gated)

pub mod delegate;
mod error;
mod naming;
mod options;
mod render;
pub mod report;
pub mod routes;
pub mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use delegate::{Delegate, GenerateRequest};
pub use error::GenerateError;
pub use naming::NamingVariables;
pub use options::{GenerateOptions, OptionConflict};
pub use render::{RenderResult, TemplateRenderer};
pub use report::{Message, MessageSink};
