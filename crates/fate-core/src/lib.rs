//! Core types for Fate Nexus: users, characters, and the sheet model.
//!
//! This crate defines the character-sheet data model (aspects, skill
//! pyramid, stress tracks, consequences) and its mutation rules. Every
//! mutation follows copy-replace discipline: an operation edits a value
//! that the owning container then replaces by id, so no two views of the
//! session ever alias the same element. Out-of-range counters clamp
//! instead of erroring; lookups by id return typed errors.

/// Permanent and temporary aspects with invoke counters.
pub mod aspect;
/// The character aggregate and its field-level operations.
pub mod character;
/// Consequence slots and their severity tiers.
pub mod consequence;
/// Error types used throughout the crate.
pub mod error;
/// The skill pyramid: sparse rating-to-slot-count sections.
pub mod skills;
/// Stress tracks with the fill-forward/clear-from-tip rule.
pub mod stress;
/// Users and their table roles.
pub mod user;

/// Re-export aspect types.
pub use aspect::{Aspect, AspectId, TempAspect};
/// Re-export character types.
pub use character::{Character, CharacterId, Stunt, StuntId};
/// Re-export consequence types.
pub use consequence::{Consequence, ConsequenceId, Severity};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export skill types.
pub use skills::{Rating, SkillSection};
/// Re-export stress types.
pub use stress::{StressTrack, TrackId};
/// Re-export user types.
pub use user::{Role, User, UserId};
