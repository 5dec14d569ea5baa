//! Note panel aggregate and its attachments.

use super::NoteError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightId(Uuid);

impl HighlightId {
    /// Creates a new random highlight identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HighlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a screenshot capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenshotId(Uuid);

impl ScreenshotId {
    /// Creates a new random screenshot identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScreenshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marked span of the note content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Highlight identifier.
    pub id: HighlightId,
    /// Start byte offset into the content.
    pub start: usize,
    /// End byte offset into the content (exclusive).
    pub end: usize,
    /// Display colour token.
    pub color: String,
}

/// Captured screenshot referenced by the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// Screenshot identifier.
    pub id: ScreenshotId,
    /// Caption shown under the capture.
    pub caption: String,
    /// Hex SHA-256 of the captured image bytes, used for dedup.
    pub content_hash: String,
}

/// Kind of entity a note can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    /// A care task.
    Task,
    /// A care journey.
    CareJourney,
    /// A patient record.
    Patient,
}

/// Reference from the note to one external entity.
///
/// Carried by value; nothing checks the id against the task store, so a
/// note can outlive the entity it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Kind of the referenced entity.
    pub kind: AttachmentKind,
    /// Identifier of the referenced entity.
    pub id: String,
    /// Display name captured at attachment time.
    pub name: String,
}

/// Named snippet expandable into the note content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMacro {
    /// Macro name used to invoke it.
    pub name: String,
    /// Text inserted on expansion.
    pub template: String,
}

/// The note panel aggregate.
///
/// Every mutating transition except [`Note::open`]/[`Note::close`] marks
/// the note dirty; only [`Note::mark_saved`] clears the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    content: String,
    highlights: Vec<Highlight>,
    screenshots: Vec<Screenshot>,
    attached_to: Option<Attachment>,
    macros: Vec<NoteMacro>,
    is_open: bool,
    is_dirty: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates an empty, closed, clean note.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the note content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the highlights in creation order.
    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Returns the screenshot captures in creation order.
    #[must_use]
    pub fn screenshots(&self) -> &[Screenshot] {
        &self.screenshots
    }

    /// Returns the current attachment, if any.
    #[must_use]
    pub const fn attached_to(&self) -> Option<&Attachment> {
        self.attached_to.as_ref()
    }

    /// Returns the defined macros in definition order.
    #[must_use]
    pub fn macros(&self) -> &[NoteMacro] {
        &self.macros
    }

    /// Returns whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether unsaved changes exist.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Returns the instant of the last save, if the note was ever saved.
    #[must_use]
    pub const fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Opens the panel. Pure UI toggle; does not touch the dirty flag.
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the panel. Pure UI toggle; does not touch the dirty flag.
    pub const fn close(&mut self) {
        self.is_open = false;
    }

    /// Replaces the whole content.
    ///
    /// Highlights whose range no longer fits the new content are dropped.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        let len = self.content.len();
        self.highlights.retain(|highlight| highlight.end <= len);
        self.is_dirty = true;
    }

    /// Inserts text at a byte offset.
    ///
    /// Highlights entirely after the insertion point shift right;
    /// highlights spanning it are dropped rather than silently corrupted.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::InvalidCursor`] when `position` is out of
    /// bounds or splits a character.
    pub fn insert_at(&mut self, position: usize, text: &str) -> Result<(), NoteError> {
        if position > self.content.len() || !self.content.is_char_boundary(position) {
            return Err(NoteError::InvalidCursor {
                position,
                len: self.content.len(),
            });
        }
        self.content.insert_str(position, text);
        let shift = text.len();
        self.highlights.retain_mut(|highlight| {
            if highlight.start >= position {
                highlight.start += shift;
                highlight.end += shift;
                true
            } else {
                highlight.end <= position
            }
        });
        self.is_dirty = true;
        Ok(())
    }

    /// Marks a span of the content.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::InvalidHighlightRange`] for inverted or empty
    /// ranges and [`NoteError::HighlightOutOfBounds`] when the range
    /// extends past the content.
    pub fn add_highlight(
        &mut self,
        start: usize,
        end: usize,
        color: impl Into<String>,
    ) -> Result<HighlightId, NoteError> {
        if start >= end {
            return Err(NoteError::InvalidHighlightRange { start, end });
        }
        if end > self.content.len() {
            return Err(NoteError::HighlightOutOfBounds {
                start,
                end,
                len: self.content.len(),
            });
        }
        let id = HighlightId::new();
        self.highlights.push(Highlight {
            id,
            start,
            end,
            color: color.into(),
        });
        self.is_dirty = true;
        Ok(id)
    }

    /// Removes a highlight.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::UnknownHighlight`] when no highlight has the
    /// given id.
    pub fn remove_highlight(&mut self, id: HighlightId) -> Result<(), NoteError> {
        let before = self.highlights.len();
        self.highlights.retain(|highlight| highlight.id != id);
        if self.highlights.len() == before {
            return Err(NoteError::UnknownHighlight(id));
        }
        self.is_dirty = true;
        Ok(())
    }

    /// Records a screenshot capture, deduplicating by content hash.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::DuplicateScreenshot`] when a capture with the
    /// same image bytes already exists.
    pub fn capture_screenshot(
        &mut self,
        image_bytes: &[u8],
        caption: impl Into<String>,
    ) -> Result<ScreenshotId, NoteError> {
        let digest = Sha256::digest(image_bytes);
        let content_hash: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        if self
            .screenshots
            .iter()
            .any(|capture| capture.content_hash == content_hash)
        {
            return Err(NoteError::DuplicateScreenshot(content_hash));
        }
        let id = ScreenshotId::new();
        self.screenshots.push(Screenshot {
            id,
            caption: caption.into(),
            content_hash,
        });
        self.is_dirty = true;
        Ok(id)
    }

    /// Removes a screenshot capture.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::UnknownScreenshot`] when no capture has the
    /// given id.
    pub fn remove_screenshot(&mut self, id: ScreenshotId) -> Result<(), NoteError> {
        let before = self.screenshots.len();
        self.screenshots.retain(|capture| capture.id != id);
        if self.screenshots.len() == before {
            return Err(NoteError::UnknownScreenshot(id));
        }
        self.is_dirty = true;
        Ok(())
    }

    /// Attaches the note to one external entity, replacing any previous
    /// attachment.
    pub fn attach(&mut self, attachment: Attachment) {
        self.attached_to = Some(attachment);
        self.is_dirty = true;
    }

    /// Clears the attachment. No-op when nothing is attached.
    pub fn detach(&mut self) {
        if self.attached_to.take().is_some() {
            self.is_dirty = true;
        }
    }

    /// Defines or replaces a named macro.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::EmptyMacroName`] when the name is empty after
    /// trimming.
    pub fn define_macro(
        &mut self,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<(), NoteError> {
        let raw_name = name.into();
        let normalized = raw_name.trim();
        if normalized.is_empty() {
            return Err(NoteError::EmptyMacroName);
        }
        self.macros.retain(|existing| existing.name != normalized);
        self.macros.push(NoteMacro {
            name: normalized.to_owned(),
            template: template.into(),
        });
        self.is_dirty = true;
        Ok(())
    }

    /// Expands a named macro into the content at a byte offset.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::UnknownMacro`] when no macro has the given
    /// name, or [`NoteError::InvalidCursor`] for a bad position.
    pub fn expand_macro(&mut self, name: &str, position: usize) -> Result<(), NoteError> {
        let template = self
            .macros
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.template.clone())
            .ok_or_else(|| NoteError::UnknownMacro(name.to_owned()))?;
        self.insert_at(position, &template)
    }

    /// Records a save, clearing the dirty flag and stamping the instant.
    pub fn mark_saved(&mut self, clock: &impl Clock) {
        self.is_dirty = false;
        self.last_saved = Some(clock.utc());
    }
}
