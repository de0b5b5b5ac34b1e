//! LLM game-master assistance for Fate Nexus.
//!
//! The oracle answers rules questions and improvises scene material on
//! request (`/ai` in chat). It is strictly best-effort: any failure is
//! converted by the caller into [`FALLBACK_REPLY`] and shown as a normal
//! chat message, never as a hard error. The client speaks the
//! OpenAI-compatible chat-completions dialect so it works against local
//! inference servers and hosted APIs alike.

/// The HTTP client and the `Assistant` trait.
pub mod client;
/// Endpoint, model, and credential configuration.
pub mod config;
/// Error types for oracle calls.
pub mod error;

/// Re-export client types.
pub use client::{Assistant, HttpOracle};
/// Re-export configuration.
pub use config::OracleConfig;
/// Re-export error types.
pub use error::{OracleError, OracleResult};

/// The fixed apology shown in chat when the oracle call fails.
pub const FALLBACK_REPLY: &str = "The spirits of the weave are silent. (oracle unavailable)";
