//! Detail view models for the selected entity.

use nightreign_domain::{
    Achievement, Boss, Build, Character, Creature, Secret, Selection, Walkthrough, WeaponPassive,
    WeaponSkill,
};
use nightreign_shared::BossRecommendations;

use super::sequence::Ticket;

/// What the detail view is showing, plus anything fetched for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub selection: Selection,
    /// Ticket of the `select` call that opened this selection
    pub opened_by: Ticket,
    pub recommendations: Option<BossRecommendations>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossDetail {
    pub boss: Boss,
    pub recommendations: Option<BossRecommendations>,
}

impl BossDetail {
    /// "Easy", "Medium", "Hard" or "Extreme".
    pub fn difficulty_label(&self) -> &'static str {
        self.boss.difficulty_bucket().label()
    }

    pub fn recommended_character_names(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .flat_map(|r| r.recommended_characters.iter())
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// The selected entity, resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Boss(BossDetail),
    Character(Character),
    Build(Build),
    Achievement(Achievement),
    Walkthrough(Walkthrough),
    Creature(Creature),
    Secret(Secret),
    WeaponSkill(WeaponSkill),
    WeaponPassive(WeaponPassive),
}

impl DetailView {
    pub fn title(&self) -> &str {
        match self {
            Self::Boss(detail) => &detail.boss.name,
            Self::Character(c) => &c.name,
            Self::Build(b) => &b.name,
            Self::Achievement(a) => &a.name,
            Self::Walkthrough(w) => &w.title,
            Self::Creature(c) => &c.name,
            Self::Secret(s) => &s.name,
            Self::WeaponSkill(s) => &s.name,
            Self::WeaponPassive(p) => &p.name,
        }
    }

    /// Key/value lines for plain-text rendering.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Boss(detail) => {
                let boss = &detail.boss;
                let mut lines = vec![
                    ("Difficulty", format!("{} ({}/10)", detail.difficulty_label(), boss.difficulty_rating)),
                    ("Levels", format!("{}-{}", boss.min_level, boss.max_level)),
                    ("Expedition", boss.expedition_name.clone()),
                    ("Weaknesses", boss.weaknesses.join(", ")),
                    ("Damage types", boss.damage_types.join(", ")),
                ];
                if detail.recommendations.is_some() {
                    lines.push(("Recommended", detail.recommended_character_names().join(", ")));
                }
                lines
            }
            Self::Character(c) => vec![
                ("Playstyle", c.playstyle.to_string()),
                ("Primary stat", c.primary_stat.clone()),
                ("Weapon", c.weapon_type.clone()),
                ("Abilities", c.abilities.join(", ")),
            ],
            Self::Build(b) => vec![
                ("Character", b.character.clone()),
                ("Type", b.build_type.clone()),
                ("Primary weapon", b.primary_weapon.clone()),
                ("Secondary weapon", b.secondary_weapon.clone().unwrap_or_default()),
                ("Best for", b.best_for.join(", ")),
            ],
            Self::Achievement(a) => vec![
                ("Difficulty", a.difficulty.to_string()),
                ("Rank", a.rank.to_string()),
                ("Earned by", format!("{:.1}%", a.percentage)),
                ("Requirements", a.requirements.clone()),
            ],
            Self::Walkthrough(w) => vec![
                ("Character", w.character.clone()),
                ("Chapters", w.chapter_count().to_string()),
            ],
            Self::Creature(c) => vec![
                ("Type", c.creature_type.to_string()),
                ("Threat", c.threat_level.to_string()),
                ("Location", c.location.clone()),
                ("Weaknesses", c.weaknesses.join(", ")),
            ],
            Self::Secret(s) => vec![
                ("Location", s.location.clone()),
                ("Reward", s.reward.clone()),
                ("How to find", s.how_to_find.clone()),
            ],
            Self::WeaponSkill(s) => vec![
                ("FP cost", s.fp_cost.to_string()),
                ("Damage type", s.damage_type.clone()),
                ("Usable with", s.usable_with.clone()),
            ],
            Self::WeaponPassive(p) => vec![
                ("Effect", p.effect.clone()),
                ("Scaling", p.scaling.clone()),
                ("Compatible", p.compatible_characters.join(", ")),
            ],
        }
    }
}
