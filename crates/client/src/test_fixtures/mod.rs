//! Test fixtures: a small consistent catalog and helper ports.
//!
//! The catalog is internally consistent: every character name referenced by
//! a build or boss exists, achievement ranks are dense and ids are unique
//! per category.

pub mod gated_api;

pub use gated_api::GatedApiPort;

use serde_json::{json, Value};

use nightreign_domain::{
    Achievement, AchievementDifficulty, Boss, BossId, Build, BuildId, Chapter, Character,
    CharacterId, Collection, Creature, CreatureId, CreatureType, CustomBuildDraft, Playstyle,
    Secret, SecretId, ThreatLevel, Walkthrough, WalkthroughId, WeaponPassive, WeaponPassiveId,
    WeaponSkill, WeaponSkillId,
};
use nightreign_shared::endpoints;

use crate::state::CatalogData;

// =============================================================================
// Catalog
// =============================================================================

pub fn bosses() -> Vec<Boss> {
    let mut gladius = Boss::new(BossId::from("boss-gladius"), "Gladius, Beast of Night", 6)
        .with_levels(1, 8)
        .with_weakness("Holy")
        .with_expedition("Tricephalos")
        .with_recommended_team("Wylder")
        .with_recommended_team("Guardian");
    gladius.damage_types = vec!["Fire".to_string(), "Physical".to_string()];

    let adel = Boss::new(BossId::from("boss-adel"), "Adel, Baron of Night", 7)
        .with_levels(3, 10)
        .with_weakness("Poison")
        .with_expedition("Gaping Jaw")
        .with_recommended_team("Ironeye");

    let fulghor = Boss::new(BossId::from("boss-fulghor"), "Fulghor, Champion of Nightglow", 9)
        .with_levels(8, 14)
        .with_weakness("Lightning")
        .with_expedition("Darkdrift Knight")
        .with_recommended_team("Executor");

    let mut heolstor = Boss::new(BossId::from("boss-heolstor"), "Heolstor the Nightlord", 10)
        .with_levels(12, 15)
        .with_weakness("Holy")
        .with_expedition("Night Aspect")
        .with_recommended_team("Recluse")
        .with_recommended_team("Wylder");
    heolstor.recommended_strategies = vec!["Stay mobile during the second phase".to_string()];

    let caligo = Boss::new(BossId::from("boss-caligo"), "Caligo, Miasma of Night", 3)
        .with_levels(1, 5)
        .with_weakness("Fire")
        .with_expedition("Fissure in the Fog");

    vec![gladius, adel, fulghor, heolstor, caligo]
}

pub fn characters() -> Vec<Character> {
    let mut wylder = Character::new(CharacterId::from("char-wylder"), "Wylder", Playstyle::Versatile);
    wylder.primary_stat = "Strength".to_string();
    wylder.weapon_type = "Greatsword".to_string();
    wylder.abilities = vec!["Claw Shot".to_string(), "Onslaught Stake".to_string()];

    let mut guardian = Character::new(CharacterId::from("char-guardian"), "Guardian", Playstyle::Tank);
    guardian.primary_stat = "Strength".to_string();
    guardian.weapon_type = "Halberd".to_string();

    let mut executor = Character::new(CharacterId::from("char-executor"), "Executor", Playstyle::Dps);
    executor.primary_stat = "Dexterity".to_string();
    executor.weapon_type = "Katana".to_string();

    let mut ironeye = Character::new(CharacterId::from("char-ironeye"), "Ironeye", Playstyle::Marksman);
    ironeye.primary_stat = "Dexterity".to_string();
    ironeye.weapon_type = "Bow".to_string();

    let mut recluse = Character::new(CharacterId::from("char-recluse"), "Recluse", Playstyle::Spellcaster);
    recluse.primary_stat = "Intelligence".to_string();
    recluse.weapon_type = "Staff".to_string();

    vec![wylder, guardian, executor, ironeye, recluse]
}

pub fn builds() -> Vec<Build> {
    let mut bleed = Build::new(BuildId::from("build-bleed-executor"), "Bleed Executor")
        .with_character("Executor");
    bleed.build_type = "Dexterity".to_string();
    bleed.primary_weapon = "Uchigatana".to_string();
    bleed.talismans = vec!["Lord of Blood's Exultation".to_string()];
    bleed.recommended_stats.insert("dexterity".to_string(), 40);
    bleed.best_for = vec!["Executor".to_string()];

    let mut faith = Build::new(BuildId::from("build-faith-wylder"), "Faith Wylder")
        .with_character("Wylder");
    faith.build_type = "Faith".to_string();
    faith.primary_weapon = "Sacred Relic Sword".to_string();
    faith.secondary_weapon = Some("Golden Order Seal".to_string());
    faith.best_for = vec!["Wylder".to_string(), "Guardian".to_string()];
    faith.strategy = Some("Buff the team before the Nightlord arrives".to_string());

    vec![bleed, faith]
}

pub fn custom_builds() -> Vec<Build> {
    let mut glass_cannon = Build::new(BuildId::from("custom-1"), "Community Glass Cannon")
        .with_character("Recluse");
    glass_cannon.build_type = "Intelligence".to_string();
    glass_cannon.primary_weapon = "Carian Regal Scepter".to_string();
    glass_cannon.strategy = Some("Stay far back, burst from range".to_string());
    vec![glass_cannon]
}

fn achievement(id: &str, name: &str, difficulty: AchievementDifficulty, rank: u32, percentage: f64) -> Achievement {
    Achievement {
        id: id.into(),
        name: name.to_string(),
        description: String::new(),
        category: "Progression".to_string(),
        difficulty,
        rank,
        percentage,
        reward: String::new(),
        requirements: String::new(),
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        achievement("ach-first-night", "First Night", AchievementDifficulty::Easy, 1, 92.5),
        achievement("ach-nightlord", "Nightlord Slain", AchievementDifficulty::Hard, 2, 31.0),
        achievement("ach-all-nightlords", "Night's End", AchievementDifficulty::Platinum, 3, 4.5),
    ]
}

pub fn walkthroughs() -> Vec<Walkthrough> {
    vec![Walkthrough {
        id: WalkthroughId::from("walk-wylder"),
        title: "Wylder's Journey".to_string(),
        description: "Remembrance quest for Wylder".to_string(),
        character: "Wylder".to_string(),
        chapters: vec![
            Chapter {
                chapter: 1,
                title: "A Familiar Face".to_string(),
                objective: "Speak to the stranger at the Roundtable Hold".to_string(),
                steps: vec!["Return to the hold".to_string(), "Talk to the stranger".to_string()],
                reward: String::new(),
            },
            Chapter {
                chapter: 2,
                title: "The Hunt".to_string(),
                objective: "Defeat the Nightlord".to_string(),
                steps: vec!["Clear the expedition".to_string()],
                reward: "Relic".to_string(),
            },
        ],
    }]
}

pub fn creatures() -> Vec<Creature> {
    let mut nightlord = Creature::new(
        CreatureId::from("creature-heolstor"),
        "Heolstor",
        CreatureType::Nightlord,
        ThreatLevel::Ultimate,
    )
    .with_weakness("Holy");
    nightlord.location = "The Night Aspect".to_string();

    let knight = Creature::new(
        CreatureId::from("creature-night-knight"),
        "Night Knight",
        CreatureType::EliteEnemy,
        ThreatLevel::High,
    )
    .with_weakness("Lightning");

    let soldier = Creature::new(
        CreatureId::from("creature-soldier"),
        "Godrick Soldier",
        CreatureType::SmallEnemy,
        ThreatLevel::Low,
    )
    .with_weakness("Fire");

    vec![nightlord, knight, soldier]
}

pub fn secrets() -> Vec<Secret> {
    vec![
        Secret {
            id: SecretId::from("secret-shifting-earth"),
            name: "Shifting Earth".to_string(),
            description: "The map can transform into a crater".to_string(),
            category: "Map events".to_string(),
            location: "Limveld".to_string(),
            difficulty: "Hard".to_string(),
            reward: "Rare weapons".to_string(),
            how_to_find: "Reach day three with a Shifting Earth active".to_string(),
        },
        Secret {
            id: SecretId::from("secret-merchant"),
            name: "Hidden Merchant".to_string(),
            description: String::new(),
            category: "NPCs".to_string(),
            location: "Castle basement".to_string(),
            difficulty: "Medium".to_string(),
            reward: "Smithing stones".to_string(),
            how_to_find: "Drop through the broken floor".to_string(),
        },
    ]
}

pub fn weapon_skills() -> Vec<WeaponSkill> {
    vec![WeaponSkill {
        id: WeaponSkillId::from("skill-moonlight"),
        name: "Transient Moonlight".to_string(),
        description: String::new(),
        fp_cost: 14,
        category: "Ash of War".to_string(),
        damage_type: "Magic".to_string(),
        effect: "Unleash a wave of moonlight".to_string(),
        usable_with: "Moonveil".to_string(),
    }]
}

pub fn weapon_passives() -> Vec<WeaponPassive> {
    vec![WeaponPassive {
        id: WeaponPassiveId::from("passive-bleed"),
        name: "Hemorrhage".to_string(),
        description: String::new(),
        category: "Status".to_string(),
        effect: "Builds up blood loss".to_string(),
        scaling: "Arcane".to_string(),
        compatible_characters: vec!["Executor".to_string()],
        weapon_types: vec!["Katana".to_string()],
    }]
}

pub fn catalog_data() -> CatalogData {
    CatalogData {
        bosses: bosses(),
        characters: characters(),
        builds: builds(),
        custom_builds: custom_builds(),
        achievements: achievements(),
        walkthroughs: walkthroughs(),
        creatures: creatures(),
        secrets: secrets(),
        weapon_skills: weapon_skills(),
        weapon_passives: weapon_passives(),
    }
}

/// Response body the service would send for a collection path, wrapped in
/// its envelope key. Unknown paths get an empty object.
pub fn collection_payload(path: &str) -> Value {
    let data = catalog_data();
    let Some(collection) = Collection::ALL
        .into_iter()
        .find(|c| endpoints::collection(*c) == path)
    else {
        return json!({});
    };

    let list = match collection {
        Collection::Bosses => json!(data.bosses),
        Collection::Characters => json!(data.characters),
        Collection::Builds => json!(data.builds),
        Collection::CustomBuilds => json!(data.custom_builds),
        Collection::Achievements => json!(data.achievements),
        Collection::Walkthroughs => json!(data.walkthroughs),
        Collection::Creatures => json!(data.creatures),
        Collection::Secrets => json!(data.secrets),
        Collection::WeaponSkills => json!(data.weapon_skills),
        Collection::WeaponPassives => json!(data.weapon_passives),
    };
    let mut envelope = serde_json::Map::new();
    envelope.insert(collection.key().to_string(), list);
    Value::Object(envelope)
}

/// Search response listing the fixture bosses whose name contains `query`.
pub fn search_payload(query: &str) -> Value {
    let needle = query.to_lowercase();
    let bosses: Vec<Boss> = bosses()
        .into_iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .collect();
    json!({
        "query": query,
        "total_results": bosses.len(),
        "bosses": bosses,
    })
}

// =============================================================================
// Drafts
// =============================================================================

pub fn complete_draft() -> CustomBuildDraft {
    CustomBuildDraft::new("Moonlit Duelist")
        .with_character("Executor")
        .with_type("Dexterity")
        .with_description("Parry-focused katana build")
        .with_primary_weapon("Moonveil")
        .with_strategy("Bait attacks, parry, riposte")
}
