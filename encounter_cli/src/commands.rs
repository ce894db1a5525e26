//! Subcommand bodies, kept free of argument parsing and stdout

use crate::selection::parse_selection;
use anyhow::{bail, Context, Result};
use bestiary_core::{Bestiary, EntityKind, EntityRecord, EntitySource};
use encounter_core::{evaluate_with, BalanceConstants, CombatantSummary, DifficultyVerdict};
use placement_core::{deploy, plan, prepare_requests, DeployReport, PlacementConfig, SceneSink};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Balance constants from `path`, or the defaults
pub fn load_constants(path: Option<&Path>) -> Result<BalanceConstants> {
    match path {
        Some(path) => BalanceConstants::load_from_path(path)
            .with_context(|| format!("loading balance constants from {}", path.display())),
        None => Ok(BalanceConstants::default()),
    }
}

/// Placement config from `path`, or the defaults
pub fn load_placement_config(path: Option<&Path>) -> Result<PlacementConfig> {
    match path {
        Some(path) => PlacementConfig::load_from_path(path)
            .with_context(|| format!("loading placement config from {}", path.display())),
        None => Ok(PlacementConfig::default()),
    }
}

/// One line of the catalog listing
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub hit_points: f64,
    pub damage: String,
    pub folder: Option<&'a str>,
}

impl<'a> From<&'a EntityRecord> for ListEntry<'a> {
    fn from(record: &'a EntityRecord) -> Self {
        ListEntry {
            id: &record.id,
            name: &record.name,
            hit_points: record.effective_hit_points(),
            damage: CombatantSummary::from_record(record, 1).damage.to_string(),
            folder: record.folder.as_deref(),
        }
    }
}

/// Everything a game master can pick from
#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub characters: Vec<ListEntry<'a>>,
    pub monsters: Vec<ListEntry<'a>>,
}

pub fn list(bestiary: &Bestiary) -> CatalogListing<'_> {
    CatalogListing {
        characters: bestiary.characters().into_iter().map(ListEntry::from).collect(),
        monsters: bestiary.monsters().into_iter().map(ListEntry::from).collect(),
    }
}

/// Selected members of one side, resolved against the catalog
#[derive(Debug, Default)]
pub struct ResolvedSide<'a> {
    pub names: Vec<&'a str>,
    pub summaries: Vec<CombatantSummary>,
}

/// Resolve `ID[:COUNT]` arguments into combatants of the given kind
///
/// Unknown ids and records of the other kind are skipped with a warning.
/// Characters always count once.
pub fn resolve_side<'a>(bestiary: &'a Bestiary, args: &[String], kind: EntityKind) -> ResolvedSide<'a> {
    let mut side = ResolvedSide::default();

    for arg in args {
        let (id, count) = parse_selection(arg);
        let Some(record) = bestiary.entity(&id) else {
            warn!(id = %id, "unknown entity, skipping");
            continue;
        };
        if record.kind != kind {
            warn!(id = %id, expected = %kind, found = %record.kind, "wrong kind of entity, skipping");
            continue;
        }

        let count = match kind {
            EntityKind::Character => 1,
            EntityKind::Monster => count,
        };
        side.names.push(record.name.as_str());
        side.summaries.push(CombatantSummary::from_record(record, count));
    }

    side
}

#[derive(Debug, Serialize)]
pub struct CompareReport<'a> {
    pub party: Vec<&'a str>,
    pub opposition: Vec<&'a str>,
    pub verdict: DifficultyVerdict,
}

/// Compare the selected characters against the selected monsters
pub fn compare<'a>(
    bestiary: &'a Bestiary,
    party_args: &[String],
    monster_args: &[String],
    constants: &BalanceConstants,
) -> Result<CompareReport<'a>> {
    let party = resolve_side(bestiary, party_args, EntityKind::Character);
    let opposition = resolve_side(bestiary, monster_args, EntityKind::Monster);

    let verdict = evaluate_with(&party.summaries, &opposition.summaries, constants)
        .context("select at least one character and one monster")?;

    Ok(CompareReport {
        party: party.names,
        opposition: opposition.names,
        verdict,
    })
}

/// Plan the selected monsters on the grid and hand the tokens to `sink`
pub fn place<K>(
    bestiary: &Bestiary,
    monster_args: &[String],
    config: &PlacementConfig,
    sink: &mut K,
) -> Result<DeployReport>
where
    K: SceneSink,
    K::Error: Send + Sync,
{
    if monster_args.is_empty() {
        bail!("no monster selected");
    }

    let selection: Vec<(String, u32)> = monster_args
        .iter()
        .map(|arg| parse_selection(arg))
        .filter(|(id, _)| match bestiary.entity(id) {
            Some(record) if record.kind != EntityKind::Monster => {
                warn!(id = %id, "not a monster, skipping");
                false
            }
            _ => true,
        })
        .collect();

    let requests = prepare_requests(selection, bestiary);
    if requests.is_empty() {
        bail!("none of the selected monsters are in the bestiary");
    }

    let plan = plan(&requests, &config.layout)?;
    let report = deploy(&plan, bestiary, &config.image_rewrite, sink)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::{Difficulty, Side, ValidationError};
    use placement_core::{Disposition, TokenSpawn};

    fn sample_bestiary() -> Bestiary {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../bestiary");
        Bestiary::load(&dir).unwrap()
    }

    #[test]
    fn test_load_sample_configs() {
        let config_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config");

        let constants = load_constants(Some(&config_dir.join("balance.toml"))).unwrap();
        assert!((constants.damage_efficiency - 0.5).abs() < f64::EPSILON);

        let config = load_placement_config(Some(&config_dir.join("placement.toml"))).unwrap();
        assert_eq!(config.layout.per_row, 5);
        assert_eq!(config.image_rewrite.to, "systems/liber-chronicles/");
    }

    #[test]
    fn test_missing_config_files_name_the_path() {
        let missing = Path::new("no/such/placement.toml");
        let err = load_placement_config(Some(missing)).unwrap_err();
        assert!(err.to_string().starts_with("loading placement config from"));
        assert!(err.to_string().contains("placement.toml"));

        let err = load_constants(Some(Path::new("no/such/balance.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("loading balance constants from"));
    }

    #[test]
    fn test_default_configs_without_path() {
        assert_eq!(load_constants(None).unwrap(), BalanceConstants::default());
        assert_eq!(load_placement_config(None).unwrap(), PlacementConfig::default());
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_list_order() {
        let bestiary = sample_bestiary();
        let listing = list(&bestiary);

        let characters: Vec<&str> = listing.characters.iter().map(|e| e.name).collect();
        assert_eq!(characters, vec!["Aria", "Brom", "Sable"]);

        // Beasts, Giants, Humanoids, Undead
        let monsters: Vec<&str> = listing.monsters.iter().map(|e| e.name).collect();
        assert_eq!(monsters, vec!["Wolf", "Ogre", "Goblin", "Wraith"]);
    }

    #[test]
    fn test_list_entry_details() {
        let bestiary = sample_bestiary();
        let listing = list(&bestiary);

        // Sable carries no weapon and gets the character default
        let sable = listing.characters.iter().find(|e| e.id == "sable").unwrap();
        assert_eq!(sable.damage, "1d6+2");

        let wraith = listing.monsters.iter().find(|e| e.id == "wraith").unwrap();
        assert!((wraith.hit_points - 30.0).abs() < f64::EPSILON);
        assert_eq!(wraith.folder, Some("Undead"));
    }

    #[test]
    fn test_resolve_side_skips_unknown_and_wrong_kind() {
        let bestiary = sample_bestiary();

        let party = resolve_side(&bestiary, &args(&["aria", "ghost", "ogre"]), EntityKind::Character);
        assert_eq!(party.names, vec!["Aria"]);
        assert_eq!(party.summaries.len(), 1);

        let monsters = resolve_side(&bestiary, &args(&["aria", "wolf:3"]), EntityKind::Monster);
        assert_eq!(monsters.names, vec!["Wolf"]);
        assert_eq!(monsters.summaries[0].count, 3);
    }

    #[test]
    fn test_resolve_side_characters_count_once() {
        let bestiary = sample_bestiary();
        let party = resolve_side(&bestiary, &args(&["brom:4"]), EntityKind::Character);
        assert_eq!(party.summaries[0].count, 1);
    }

    #[test]
    fn test_compare() {
        let bestiary = sample_bestiary();
        let report = compare(
            &bestiary,
            &args(&["aria"]),
            &args(&["goblin:3"]),
            &BalanceConstants::default(),
        )
        .unwrap();

        // 21 / 5 - 32 / 9 = 0.64
        assert_eq!(report.verdict.difficulty, Difficulty::Balanced);
        assert!((report.verdict.opposition.total_hp - 21.0).abs() < f64::EPSILON);
        assert_eq!(report.party, vec!["Aria"]);
        assert_eq!(report.opposition, vec!["Goblin"]);
    }

    #[test]
    fn test_compare_unresolved_party_is_an_error() {
        let bestiary = sample_bestiary();
        let err = compare(
            &bestiary,
            &args(&["ghost", "ogre"]),
            &args(&["wolf"]),
            &BalanceConstants::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("select at least one character and one monster"));
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptySide(Side::Party))
        );
    }

    #[test]
    fn test_compare_without_monsters_is_an_error() {
        let bestiary = sample_bestiary();
        let err = compare(&bestiary, &args(&["aria"]), &[], &BalanceConstants::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptySide(Side::Opposition))
        );
    }

    #[test]
    fn test_place() {
        let bestiary = sample_bestiary();
        let mut tokens: Vec<TokenSpawn> = Vec::new();
        let report = place(
            &bestiary,
            &args(&["wolf:2", "ghost", "aria", "ogre"]),
            &PlacementConfig::default(),
            &mut tokens,
        )
        .unwrap();

        assert_eq!(report.spawned, 3);
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Wolf 1", "Wolf 2", "Ogre"]);
        assert!(tokens.iter().all(|t| t.disposition == Disposition::Hostile));
        // Skipped entries take no grid space
        assert!((tokens[2].y - 1150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_place_without_monsters_is_an_error() {
        let bestiary = sample_bestiary();
        let mut tokens: Vec<TokenSpawn> = Vec::new();

        let err = place(&bestiary, &[], &PlacementConfig::default(), &mut tokens).unwrap_err();
        assert!(err.to_string().contains("no monster selected"));

        let err = place(
            &bestiary,
            &args(&["aria", "ghost"]),
            &PlacementConfig::default(),
            &mut tokens,
        )
        .unwrap_err();
        assert!(err.to_string().contains("none of the selected monsters"));
        assert!(tokens.is_empty());
    }
}
