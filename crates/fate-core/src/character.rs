//! The character aggregate and its field-level operations.
//!
//! Every operation mutates one character value; the owning room replaces
//! that value by id afterwards. No operation touches another character,
//! and no cross-character invariants exist (duplicate names are fine).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aspect::{Aspect, AspectId, TempAspect};
use crate::consequence::{Consequence, ConsequenceId, Severity};
use crate::error::{CoreError, CoreResult};
use crate::skills::SkillSection;
use crate::stress::{StressTrack, TrackId};
use crate::user::UserId;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Unique identifier for a stunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StuntId(pub Uuid);

impl StuntId {
    /// Generate a new random stunt ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StuntId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StuntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A stunt: a free-text rules exception the character owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stunt {
    /// Unique identifier.
    pub id: StuntId,
    /// The stunt text.
    pub text: String,
}

impl Stunt {
    /// Create a stunt with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: StuntId::new(),
            text: text.into(),
        }
    }
}

/// A full character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Character name. Duplicates across the room are permitted.
    pub name: String,
    /// High concept aspect text.
    pub concept: String,
    /// Trouble aspect text.
    pub trouble: String,
    /// Portrait as a `data:image/jpeg;base64,...` string, if one was set.
    pub portrait: Option<String>,
    /// Fate point pool. Clamped at zero, no upper bound.
    pub fate_points: u32,
    /// Permanent aspects.
    pub aspects: Vec<Aspect>,
    /// Temporary aspects with invoke counters.
    pub temp_aspects: Vec<TempAspect>,
    /// The fixed ladder section of the skill pyramid.
    pub skills: SkillSection,
    /// The free-form custom section of the skill pyramid.
    pub custom_skills: SkillSection,
    /// Stunts.
    pub stunts: Vec<Stunt>,
    /// Free-text extras (gear, notes, anything).
    pub extras: String,
    /// Stress tracks. The first two are the protected built-ins.
    pub stress: Vec<StressTrack>,
    /// Consequence slots.
    pub consequences: Vec<Consequence>,
    /// The user who plays this character. A back-reference only; the
    /// room owns the character itself.
    pub owner: UserId,
}

impl Character {
    /// Create a default character sheet for an owner: three fate points,
    /// three open aspects, the standard ladder, three open stunts, the
    /// protected Physical and Mental stress tracks, and the three
    /// starting consequence slots.
    pub fn new(owner: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            concept: String::new(),
            trouble: String::new(),
            portrait: None,
            fate_points: 3,
            aspects: vec![Aspect::new(""), Aspect::new(""), Aspect::new("")],
            temp_aspects: Vec::new(),
            skills: SkillSection::default_ladder(),
            custom_skills: SkillSection::new(),
            stunts: vec![Stunt::new(""), Stunt::new(""), Stunt::new("")],
            extras: String::new(),
            stress: vec![
                StressTrack::new("Physical", true),
                StressTrack::new("Mental", true),
            ],
            consequences: vec![
                Consequence::new(Severity::Mild),
                Consequence::new(Severity::Moderate),
                Consequence::new(Severity::Severe),
            ],
            owner,
        }
    }

    /// Set the character name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the high concept.
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.concept = concept.into();
    }

    /// Set the trouble.
    pub fn set_trouble(&mut self, trouble: impl Into<String>) {
        self.trouble = trouble.into();
    }

    /// Set the extras text.
    pub fn set_extras(&mut self, extras: impl Into<String>) {
        self.extras = extras.into();
    }

    /// Set or replace the portrait data URL.
    pub fn set_portrait(&mut self, portrait: impl Into<String>) {
        self.portrait = Some(portrait.into());
    }

    /// Adjust the fate point pool by a delta, clamping at zero.
    /// Returns the new value.
    pub fn adjust_fate_points(&mut self, delta: i32) -> u32 {
        self.fate_points = self.fate_points.saturating_add_signed(delta);
        self.fate_points
    }

    /// Append a permanent aspect and return its id.
    pub fn add_aspect(&mut self, text: impl Into<String>) -> AspectId {
        let aspect = Aspect::new(text);
        let id = aspect.id;
        self.aspects.push(aspect);
        id
    }

    /// Remove a permanent aspect by id.
    pub fn remove_aspect(&mut self, id: AspectId) -> CoreResult<Aspect> {
        let index = self
            .aspects
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AspectNotFound(id))?;
        Ok(self.aspects.remove(index))
    }

    /// Set the text of a permanent aspect.
    pub fn set_aspect_text(&mut self, id: AspectId, text: impl Into<String>) -> CoreResult<()> {
        let aspect = self
            .aspects
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::AspectNotFound(id))?;
        aspect.text = text.into();
        Ok(())
    }

    /// Append a temporary aspect (one free invoke) and return its id.
    pub fn add_temp_aspect(&mut self, text: impl Into<String>) -> AspectId {
        let aspect = TempAspect::new(text);
        let id = aspect.id;
        self.temp_aspects.push(aspect);
        id
    }

    /// Remove a temporary aspect by id.
    pub fn remove_temp_aspect(&mut self, id: AspectId) -> CoreResult<TempAspect> {
        let index = self
            .temp_aspects
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AspectNotFound(id))?;
        Ok(self.temp_aspects.remove(index))
    }

    /// Adjust a temporary aspect's invoke counter, clamping at zero.
    /// Returns the new value.
    pub fn adjust_invokes(&mut self, id: AspectId, delta: i32) -> CoreResult<u32> {
        let aspect = self
            .temp_aspects
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::AspectNotFound(id))?;
        Ok(aspect.adjust_invokes(delta))
    }

    /// Append a stunt and return its id.
    pub fn add_stunt(&mut self, text: impl Into<String>) -> StuntId {
        let stunt = Stunt::new(text);
        let id = stunt.id;
        self.stunts.push(stunt);
        id
    }

    /// Remove a stunt by id.
    pub fn remove_stunt(&mut self, id: StuntId) -> CoreResult<Stunt> {
        let index = self
            .stunts
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::StuntNotFound(id))?;
        Ok(self.stunts.remove(index))
    }

    /// Append an open consequence slot of the given severity and return
    /// its id. Additional slots of an already-present tier are allowed.
    pub fn add_consequence(&mut self, severity: Severity) -> ConsequenceId {
        let consequence = Consequence::new(severity);
        let id = consequence.id;
        self.consequences.push(consequence);
        id
    }

    /// Remove a consequence by id.
    pub fn remove_consequence(&mut self, id: ConsequenceId) -> CoreResult<Consequence> {
        let index = self
            .consequences
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::ConsequenceNotFound(id))?;
        Ok(self.consequences.remove(index))
    }

    /// Set the text of a consequence.
    pub fn set_consequence_text(
        &mut self,
        id: ConsequenceId,
        text: impl Into<String>,
    ) -> CoreResult<()> {
        let consequence = self
            .consequences
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::ConsequenceNotFound(id))?;
        consequence.text = text.into();
        Ok(())
    }

    /// Append a deletable stress track with two cells and return its id.
    pub fn add_stress_track(&mut self, name: impl Into<String>) -> TrackId {
        let track = StressTrack::new(name, false);
        let id = track.id;
        self.stress.push(track);
        id
    }

    /// Remove a stress track by id. Protected tracks refuse removal.
    pub fn remove_stress_track(&mut self, id: TrackId) -> CoreResult<StressTrack> {
        let index = self
            .stress
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TrackNotFound(id))?;
        if self.stress[index].protected {
            return Err(CoreError::ProtectedTrack(self.stress[index].name.clone()));
        }
        Ok(self.stress.remove(index))
    }

    /// Get a mutable reference to a stress track by id.
    pub fn stress_track_mut(&mut self, id: TrackId) -> CoreResult<&mut StressTrack> {
        self.stress
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::TrackNotFound(id))
    }

    /// Find a stress track by name (case-insensitive).
    pub fn stress_track_by_name(&self, name: &str) -> Option<&StressTrack> {
        self.stress
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
