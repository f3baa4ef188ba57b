use camino::Utf8PathBuf;
use colored::Colorize;
use draft_core::{counter_item_panel, DraftSession, HeroCatalog, Panel, Side};
use miette::IntoDiagnostic;
use serde_json::{json, to_string_pretty};

use crate::errors::CliError;
use crate::println_pad;
use crate::utils::load_data;

pub struct AnalyzeDraftArgs {
    pub data_path: Utf8PathBuf,
    pub ally: Vec<String>,
    pub enemy: Vec<String>,
    /// Overrides every panel's default line cap.
    pub max_bullets: Option<usize>,
    pub json: bool,
}

pub fn analyze_draft(args: AnalyzeDraftArgs) -> miette::Result<()> {
    if let Some(provided @ 0) = args.max_bullets {
        return Err(CliError::InvalidMaxBullets { provided }.into());
    }
    if args.ally.is_empty() && args.enemy.is_empty() {
        return Err(CliError::EmptyDraft.into());
    }

    let data = load_data(args.data_path)?;
    let session = build_session(data.catalog(), &args.ally, &args.enemy)?;

    let lookup = data.lookup();
    let result = lookup
        .analyze(&session)
        .map_err(|e| CliError::unknown_hero(e.0.as_str()))?;
    let mentions = lookup
        .counter_items(&session)
        .map_err(|e| CliError::unknown_hero(e.0.as_str()))?;

    if args.json {
        let report = json!({
            "entries": result.entries(),
            "counterItems": mentions,
        });
        println!("{}", to_string_pretty(&report).into_diagnostic()?);
        return Ok(());
    }

    for entry in result.side(Side::Ally) {
        for panel in entry.panels() {
            print_panel("⚡", &panel, args.max_bullets);
        }
    }
    if !session.heroes(Side::Enemy).is_empty() {
        print_panel("🛡️", &counter_item_panel(&mentions), args.max_bullets);
    }
    for entry in result.side(Side::Enemy) {
        for panel in entry.panels() {
            print_panel("🎯", &panel, args.max_bullets);
        }
    }
    println!();

    Ok(())
}

/// Resolve picker text for both sides and place the heroes in a new session.
fn build_session(
    catalog: &HeroCatalog,
    ally: &[String],
    enemy: &[String],
) -> Result<DraftSession, CliError> {
    let mut session = DraftSession::new();
    for (side, names) in [(Side::Ally, ally), (Side::Enemy, enemy)] {
        for name in names {
            let hero = catalog
                .resolve(name)
                .map_err(|_| CliError::unknown_hero(name.as_str()))?;
            session
                .add(side, hero.id().clone())
                .map_err(|e| CliError::draft_rejected(hero.display_name(), side, e))?;
        }
    }
    Ok(session)
}

fn print_panel(icon: &str, panel: &Panel, max_bullets: Option<usize>) {
    println_pad!("\n{} {}", icon, panel.title.bright_magenta().bold());
    let body = panel.body(max_bullets.unwrap_or(panel.kind.max_lines()));
    for line in body.lines() {
        if panel.lines.is_empty() {
            println_pad!("   {}", line.dimmed());
        } else {
            println_pad!("   {}", line.bright_white());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use draft_core::{DataLayout, DraftData, DraftError, HeroId};
    use tempfile::TempDir;

    fn load_fixture() -> (TempDir, DraftData) {
        let dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(
            root.join("heroes.json"),
            r#"{ "npc_dota_hero_axe": "Axe", "npc_dota_hero_lion": "Lion" }"#,
        )
        .unwrap();
        std::fs::write(
            root.join("normalized_heroes.json"),
            r#"{ "lion": { "aliases": ["Demon Witch"] } }"#,
        )
        .unwrap();
        let data = DraftData::load(DataLayout::from_root(root)).unwrap();
        (dir, data)
    }

    #[test]
    fn test_build_session_resolves_names() {
        let (_dir, data) = load_fixture();
        let session = build_session(
            data.catalog(),
            &["axe".to_string()],
            &["Demon Witch".to_string()],
        )
        .unwrap();

        assert_eq!(session.heroes(Side::Ally), [HeroId::new("axe")]);
        assert_eq!(session.heroes(Side::Enemy), [HeroId::new("lion")]);
    }

    #[test]
    fn test_zero_max_bullets_rejected() {
        let (dir, _data) = load_fixture();
        let result = analyze_draft(AnalyzeDraftArgs {
            data_path: Utf8Path::from_path(dir.path()).unwrap().to_path_buf(),
            ally: vec!["Axe".to_string()],
            enemy: Vec::new(),
            max_bullets: Some(0),
            json: true,
        });

        let report = result.unwrap_err();
        assert!(matches!(
            report.downcast_ref::<CliError>(),
            Some(CliError::InvalidMaxBullets { provided: 0 })
        ));
    }

    #[test]
    fn test_build_session_unknown_hero() {
        let (_dir, data) = load_fixture();
        let result = build_session(data.catalog(), &["Invoker".to_string()], &[]);
        assert!(matches!(result, Err(CliError::UnknownHero { name }) if name == "Invoker"));
    }

    #[test]
    fn test_build_session_rejects_hero_on_both_sides() {
        let (_dir, data) = load_fixture();
        let result = build_session(data.catalog(), &["Axe".to_string()], &["axe".to_string()]);
        assert!(matches!(
            result,
            Err(CliError::DraftRejected {
                side: Side::Enemy,
                source: DraftError::AlreadyDrafted { .. },
                ..
            })
        ));
    }
}
