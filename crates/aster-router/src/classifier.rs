// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based intent classification.
//!
//! Classifies free text into one of six fixed intent categories using
//! substring membership against per-category keyword lists. No model, no
//! network, no latency.

use aster_core::Intent;

/// Confidence reported for every classification.
///
/// The classifier computes no real score; this constant is a stub for a
/// future scoring model and is reported unconditionally on the wire.
pub const INTENT_CONFIDENCE: f32 = 0.8;

/// Per-category keyword lists, in priority order. The first category with
/// any keyword contained in the lowered input wins, even when keywords
/// from several categories co-occur.
const KEYWORD_RULES: &[(Intent, &[&str])] = &[
    (Intent::MusicControl, &["play", "music", "song", "album"]),
    (
        Intent::CalendarManagement,
        &["schedule", "meeting", "calendar", "appointment"],
    ),
    (Intent::NoteTaking, &["note", "remember", "write", "save"]),
    (Intent::WeatherQuery, &["weather", "temperature", "forecast"]),
    (Intent::NewsQuery, &["news", "headlines", "update"]),
];

/// Classify free text into an intent category.
///
/// Matching is substring containment over the lowercased input, not
/// whole-word matching: "forecasting" matches the "forecast" keyword.
/// Falls through to `general_query` when no keyword matches.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::GeneralQuery)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_single_category_keywords() {
        assert_eq!(classify("play some jazz"), Intent::MusicControl);
        assert_eq!(classify("schedule a sync for friday"), Intent::CalendarManagement);
        assert_eq!(classify("remember the milk"), Intent::NoteTaking);
        assert_eq!(classify("what's the temperature outside"), Intent::WeatherQuery);
        assert_eq!(classify("show me the headlines"), Intent::NewsQuery);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("PLAY THE ALBUM"), Intent::MusicControl);
        assert_eq!(classify("Weather Report"), Intent::WeatherQuery);
    }

    #[test]
    fn classify_matches_substrings_not_whole_words() {
        // "forecast" is contained in "forecasting"
        assert_eq!(classify("forecasting models"), Intent::WeatherQuery);
        // "play" is contained in "display" -- faithful substring semantics
        assert_eq!(classify("display this"), Intent::MusicControl);
    }

    #[test]
    fn classify_priority_music_beats_note_taking() {
        // Contains "remember" (note_taking) and "play"/"music"
        // (music_control); music is checked first and must win.
        assert_eq!(classify("remember to play music"), Intent::MusicControl);
    }

    #[test]
    fn classify_priority_weather_beats_news() {
        // "update" is a news keyword but "weather" is checked first.
        assert_eq!(classify("weather update please"), Intent::WeatherQuery);
    }

    #[test]
    fn classify_falls_through_to_general_query() {
        assert_eq!(classify("turn on the lights"), Intent::GeneralQuery);
        assert_eq!(classify(""), Intent::GeneralQuery);
    }

    #[test]
    fn confidence_constant_is_the_documented_placeholder() {
        assert_eq!(INTENT_CONFIDENCE, 0.8);
    }
}
