// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vocabulary-based entity extraction.
//!
//! Scans whitespace tokens for fixed media/event literals and tags each
//! match with its token-index span.

use aster_core::{Entity, EntityKind};

/// Tokens tagged as `media_type` entities.
const MEDIA_TOKENS: &[&str] = &["music", "song", "album"];

/// Tokens tagged as `event_type` entities.
const EVENT_TOKENS: &[&str] = &["meeting", "appointment"];

/// Extract entities from free text.
///
/// Unlike the classifier, matching here is whole-token: the lowercased
/// token must equal a vocabulary literal exactly, so "musical" yields
/// nothing. Each matching token produces one entity with
/// `start` = token index, `end` = `start + 1`, and the original
/// (non-lowercased) token text as its value. Input order is preserved.
pub fn extract(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for (index, token) in text.split_whitespace().enumerate() {
        let lower = token.to_lowercase();
        let kind = if MEDIA_TOKENS.contains(&lower.as_str()) {
            Some(EntityKind::MediaType)
        } else if EVENT_TOKENS.contains(&lower.as_str()) {
            Some(EntityKind::EventType)
        } else {
            None
        };

        if let Some(kind) = kind {
            entities.push(Entity {
                kind,
                value: token.to_string(),
                start: index,
                end: index + 1,
            });
        }
    }

    entities
}
