use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    PitchBlack,
    Sunset,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::PitchBlack,
            Self::PitchBlack => Self::Sunset,
            Self::Sunset => Self::Dark,
        }
    }
}

/// One entry as written in the catalog file, before URL validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawVideoEntry {
    pub url: String,
    pub title: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDescriptor {
    pub url: Url,
    pub title: String,
    pub description: String,
    pub cta: String,
}

impl VideoDescriptor {
    /// Validates the raw URL. Rejected entries are dropped by the catalog
    /// builder, but the parse error stays visible to callers that want it.
    pub fn from_raw(raw: &RawVideoEntry) -> Result<Self, url::ParseError> {
        let url = Url::parse(&raw.url)?;
        Ok(Self {
            url,
            title: raw.title.clone(),
            description: raw.description.clone(),
            cta: raw.cta.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub videos: Vec<RawVideoEntry>,
    #[serde(default = "default_clip_seconds")]
    pub clip_seconds: u16,
    #[serde(default)]
    pub theme: Theme,
}

fn default_clip_seconds() -> u16 {
    6
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            videos: Vec::new(),
            clip_seconds: default_clip_seconds(),
            theme: Theme::default(),
        }
    }
}
