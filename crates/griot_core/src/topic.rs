//! Topic and style catalogs driving content selection.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Static, ordered, immutable enumeration of post topics.
///
/// The catalog is both the domain of topic selection and the domain of the
/// topic-repeat check. It is never empty by construction: [`TopicCatalog::new`]
/// falls back to the built-in default when handed an empty list.
///
/// # Examples
///
/// ```
/// use griot_core::TopicCatalog;
///
/// let catalog = TopicCatalog::new(vec!["A".to_string(), "B".to_string()]);
/// assert_eq!(catalog.topics().len(), 2);
///
/// let default = TopicCatalog::default();
/// assert!(!default.topics().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCatalog {
    topics: Vec<String>,
}

impl TopicCatalog {
    /// Create a catalog from an explicit topic list.
    ///
    /// An empty list yields the default catalog, preserving the invariant
    /// that the catalog is never empty.
    pub fn new(topics: Vec<String>) -> Self {
        if topics.is_empty() {
            Self::default()
        } else {
            Self { topics }
        }
    }

    /// The topics, in catalog order.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// A copy of the catalog shuffled into random traversal order.
    pub fn shuffled(&self) -> Vec<String> {
        let mut topics = self.topics.clone();
        topics.shuffle(&mut rand::thread_rng());
        topics
    }

    /// A uniformly random topic from the full catalog.
    ///
    /// Used only by the exhaustion fallback in topic selection; the catalog
    /// is never empty, so this always returns a topic.
    pub fn random(&self) -> &str {
        self.topics
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(&self.topics[0])
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self {
            topics: [
                "African fashion trends and designers",
                "African innovations and technology breakthroughs",
                "Stories of everyday life in different African countries",
                "Economic developments and trade history",
                "Modern African leaders and diplomacy",
                "African cuisine and traditional recipes",
                "Educational and intellectual movements",
                "African sports achievements and history",
                "Cultural preservation during colonial period",
                "African languages and linguistic diversity",
                "Travel and tourism destinations in Africa",
                "Notable African scientists and inventors",
                "Women's roles in African history",
                "Environmental conservation in Africa",
                "Festivals, rituals, and cultural celebrations",
                "Health initiatives and medical breakthroughs",
                "Community projects and social impact initiatives",
                "Emerging African entrepreneurs and startups",
                "Post-independence achievements and challenges",
                "Tech hubs and innovation centers across Africa",
                "African art, music, and literature",
                "African wildlife and national parks",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Ordered list of style-prompt templates.
///
/// Each template may contain a `{topic}` placeholder, substituted at render
/// time. A random style is drawn per generation attempt and doubles as the
/// image style hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCatalog {
    styles: Vec<String>,
}

impl StyleCatalog {
    /// Create a catalog from an explicit style list, defaulting when empty.
    pub fn new(styles: Vec<String>) -> Self {
        if styles.is_empty() {
            Self::default()
        } else {
            Self { styles }
        }
    }

    /// The style templates, in catalog order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Render a uniformly random style template for the given topic.
    ///
    /// # Examples
    ///
    /// ```
    /// use griot_core::StyleCatalog;
    ///
    /// let styles = StyleCatalog::new(vec!["Explain {topic} simply.".to_string()]);
    /// assert_eq!(styles.render_random("jazz"), "Explain jazz simply.");
    /// ```
    pub fn render_random(&self, topic: &str) -> String {
        let template = self
            .styles
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(&self.styles[0]);
        template.replace("{topic}", topic)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            styles: [
                "Share an inspiring story about {topic} that everyone can learn from.",
                "Highlight the historical significance of {topic}.",
                "Explain {topic} in a way that educates and engages readers.",
                "Tell a little-known fact about {topic}.",
                "Discuss how {topic} shaped African history and culture.",
                "Celebrate achievements in {topic} and their lasting impact.",
                "Provide an interesting anecdote about {topic}.",
                "Showcase the people behind {topic} and their contributions.",
                "Explain {topic} in a practical context for readers today.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
