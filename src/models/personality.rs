use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

pub const MOODS: [&str; 8] = [
    "happy",
    "excited",
    "relaxed",
    "adventurous",
    "romantic",
    "contemplative",
    "curious",
    "energetic",
];

pub const HOBBIES: [&str; 12] = [
    "reading",
    "gaming",
    "cooking",
    "traveling",
    "sports",
    "music",
    "art",
    "photography",
    "dancing",
    "writing",
    "gardening",
    "technology",
];

pub const GENRES: [&str; 10] = [
    "Comedy",
    "Action",
    "Drama",
    "Sci-Fi",
    "Romance",
    "Thriller",
    "Mystery",
    "Fantasy",
    "Horror",
    "Animation",
];

pub const VIBES: [&str; 10] = [
    "chill",
    "intense",
    "uplifting",
    "dark",
    "funny",
    "thrilling",
    "peaceful",
    "wild",
    "mysterious",
    "inspiring",
];

/// The four personality descriptors a recommendation is driven by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Traits {
    pub mood: String,
    pub hobby: String,
    pub genre: String,
    pub vibe: String,
}

/// Request body for `POST /recommend`
///
/// Every field is optional on the wire so a missing field can be reported as a
/// 400 with a readable message instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TraitsRequest {
    pub mood: Option<String>,
    pub hobby: Option<String>,
    pub genre: Option<String>,
    pub vibe: Option<String>,
}

impl Traits {
    /// Picks each trait uniformly from its fixed pool
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // Pools are non-empty constants, so `choose` always yields a value.
        fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
            pool.choose(rng).copied().unwrap_or_default().to_string()
        }

        Self {
            mood: pick(&MOODS, rng),
            hobby: pick(&HOBBIES, rng),
            genre: pick(&GENRES, rng),
            vibe: pick(&VIBES, rng),
        }
    }
}

impl TryFrom<TraitsRequest> for Traits {
    type Error = String;

    /// Requires every field to be present and non-blank; names the first offender
    fn try_from(request: TraitsRequest) -> Result<Self, Self::Error> {
        fn required(value: Option<String>, field: &str) -> Result<String, String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(format!("All fields required (missing: {})", field)),
            }
        }

        Ok(Self {
            mood: required(request.mood, "mood")?,
            hobby: required(request.hobby, "hobby")?,
            genre: required(request.genre, "genre")?,
            vibe: required(request.vibe, "vibe")?,
        })
    }
}
