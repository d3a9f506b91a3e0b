//! Walkthrough entity - Per-character chapter guides

use serde::{Deserialize, Serialize};

use crate::WalkthroughId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walkthrough {
    pub id: WalkthroughId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub character: String,
    /// In reading order
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// One chapter of a walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub chapter: u32,
    pub title: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub reward: String,
}

impl Walkthrough {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_steps(&self) -> usize {
        self.chapters.iter().map(|c| c.steps.len()).sum()
    }
}
