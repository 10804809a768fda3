use serde::{Deserialize, Serialize};

pub mod personality;
pub mod recommendation;

pub use personality::{Traits, TraitsRequest};
pub use recommendation::{MovieDetail, Recommendation, Suggestion};

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Raw `generateContent` response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ============================================================================
// Hugging Face Inference API Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HfRequest<'a> {
    pub inputs: &'a str,
    pub parameters: HfParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct HfParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

/// One element of the text-generation response array
#[derive(Debug, Clone, Deserialize)]
pub struct HfGeneration {
    #[serde(default)]
    pub generated_text: Option<String>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbSearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// `/movie/{id}?append_to_response=credits`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct TmdbCredits {
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbCrewMember {
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
