use crate::models::Traits;

/// Line prefix the mood is rendered under in [`build_prompt`]
pub const MOOD_MARKER: &str = "Mood: ";

/// Mood used for the fallback prompt when none can be recovered
pub const DEFAULT_MOOD: &str = "happy";

/// Renders the primary recommendation prompt
///
/// Deterministic: the same traits always produce the same text.
pub fn build_prompt(traits: &Traits) -> String {
    format!(
        r#"
Given the following personality traits:
- {MOOD_MARKER}{mood}
- Hobby: {hobby}
- Preferred Genre: {genre}
- Vibe: {vibe}

Suggest 3 to 5 matching movies.

Your response should be ONLY a valid JSON array with each item like:
{{"title": "Movie Title", "reason": "Why it fits"}}
"#,
        mood = traits.mood,
        hobby = traits.hobby,
        genre = traits.genre,
        vibe = traits.vibe,
    )
}

/// Recovers the mood from a prompt built by [`build_prompt`]
///
/// Takes the rest of the line after [`MOOD_MARKER`]. This is tied to the exact
/// wording of the primary prompt; callers passing other text get [`DEFAULT_MOOD`].
pub fn mood_from_prompt(prompt: &str) -> &str {
    prompt
        .split_once(MOOD_MARKER)
        .and_then(|(_, rest)| rest.lines().next())
        .map(str::trim)
        .filter(|mood| !mood.is_empty())
        .unwrap_or(DEFAULT_MOOD)
}

/// Short prompt sent to the weaker fallback models
pub fn build_fallback_prompt(prompt: &str) -> String {
    format!(
        r#"Based on mood: {}, recommend 3 movies in JSON format: [{{"title": "Movie Name", "reason": "Brief reason"}}]"#,
        mood_from_prompt(prompt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits() -> Traits {
        Traits {
            mood: "contemplative".to_string(),
            hobby: "gardening".to_string(),
            genre: "Sci-Fi".to_string(),
            vibe: "peaceful".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_every_trait() {
        let prompt = build_prompt(&traits());
        for value in ["contemplative", "gardening", "Sci-Fi", "peaceful"] {
            assert!(prompt.contains(value), "prompt is missing {value}");
        }
        assert!(prompt.contains("ONLY a valid JSON array"));
        assert!(prompt.contains("3 to 5"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&traits()), build_prompt(&traits()));
    }

    #[test]
    fn test_mood_round_trips_through_prompt() {
        assert_eq!(mood_from_prompt(&build_prompt(&traits())), "contemplative");
    }

    #[test]
    fn test_mood_defaults_without_marker() {
        assert_eq!(mood_from_prompt("recommend me something"), DEFAULT_MOOD);
        assert_eq!(mood_from_prompt("Mood: \nHobby: art"), DEFAULT_MOOD);
    }

    #[test]
    fn test_fallback_prompt_mentions_only_mood() {
        let fallback = build_fallback_prompt(&build_prompt(&traits()));
        assert!(fallback.starts_with("Based on mood: contemplative,"));
        assert!(!fallback.contains("gardening"));
        assert!(fallback.contains(r#"[{"title": "Movie Name", "reason": "Brief reason"}]"#));
    }
}
