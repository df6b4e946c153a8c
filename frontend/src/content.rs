use serde::Deserialize;

const LANDING_JSON: &str = include_str!("../content/landing.json");

/// Events shown before "Show More Events" is pressed.
pub const EVENTS_PREVIEW: usize = 6;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct EventEntry {
    pub time: String,
    pub location: String,
    pub title: String,
    pub link: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CommunityPost {
    pub date: String,
    pub text: String,
    pub link: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Article {
    pub date: String,
    pub title: String,
    pub link: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LandingContent {
    pub events: Vec<EventEntry>,
    pub posts: Vec<CommunityPost>,
    pub articles: Vec<Article>,
}

impl LandingContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The feed compiled into the bundle. A broken file leaves the page with
    /// empty lists instead of failing to render.
    pub fn bundled() -> Self {
        match Self::parse(LANDING_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to parse landing content: {}", e);
                Self::default()
            }
        }
    }

    pub fn visible_events(&self, show_all: bool) -> &[EventEntry] {
        if show_all {
            &self.events
        } else {
            &self.events[..self.events.len().min(EVENTS_PREVIEW)]
        }
    }
}
