//! Table state for Fate Nexus.
//!
//! A [`Table`](table::Table) owns the local user and the room: its
//! characters and its append-only chat log. Everything lives in one
//! process; the join code is a shareable label, not a handle into any
//! registry. A [`SnapshotStore`](store::SnapshotStore) mirrors the whole
//! table to a JSON document after every mutation and silently falls back
//! to defaults when the document is missing or unreadable.

/// Chat messages and their kinds.
pub mod chat;
/// Error types used throughout the crate.
pub mod error;
/// Portrait ingestion: downscale and re-encode uploaded images.
pub mod portrait;
/// The room: join code, participants, characters, chat log.
pub mod room;
/// Routing of chat input between plain messages and oracle prompts.
pub mod router;
/// The snapshot mirror: load, save, and clear the persisted table.
pub mod store;
/// The table session: the local user plus the room and its operations.
pub mod table;
/// Character export and import as standalone JSON documents.
pub mod transfer;

/// Re-export chat types.
pub use chat::{ChatMessage, MessageId, MessageKind};
/// Re-export error types.
pub use error::{TableError, TableResult};
/// Re-export portrait encoding.
pub use portrait::encode_portrait;
/// Re-export room types.
pub use room::{Room, generate_join_code};
/// Re-export routing types.
pub use router::{Routed, route};
/// Re-export the snapshot store.
pub use store::SnapshotStore;
/// Re-export the table session.
pub use table::Table;
