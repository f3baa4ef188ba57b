use crate::utils::config::{self, AppConfig};
use camino::Utf8PathBuf;
use colored::Colorize;
use draft_core::data::{HEROES_FILE, NORMALIZED_HEROES_FILE, STRATEGY_DIR};
use draft_core::PanelKind;
use miette::Result;

/// A data directory needs both hero files; strategy documents are optional.
fn is_valid_data_path(path: &Utf8PathBuf) -> bool {
    path.join(HEROES_FILE).is_file() && path.join(NORMALIZED_HEROES_FILE).is_file()
}

fn config_path_display() -> String {
    config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// One `name: value` line. Unset values show what applies instead; `valid`
/// adds a ✓/✗ marker.
fn print_setting(name: &str, value: Option<String>, unset: &str, valid: Option<bool>) {
    let value = match value {
        Some(v) => v.normal(),
        None => unset.bright_yellow(),
    };
    let marker = match valid {
        Some(true) => " ✓".bright_green().to_string(),
        Some(false) => " ✗".bright_red().to_string(),
        None => String::new(),
    };
    println!("  {} {}{}", format!("{}:", name).bright_white(), value, marker);
}

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let panel_default = format!(
        "(per panel: {}, counter tips {})",
        PanelKind::Tips.max_lines(),
        PanelKind::CounterTips.max_lines()
    );

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path_display());
    print_setting(
        "data_path",
        cfg.data_path.as_ref().map(ToString::to_string),
        "(not set, using ./data)",
        cfg.data_path.as_ref().map(is_valid_data_path),
    );
    print_setting("log_level", cfg.log_level.clone(), "(warn)", None);
    print_setting(
        "max_bullets",
        cfg.max_bullets.map(|n| n.to_string()),
        &panel_default,
        None,
    );
    println!();

    Ok(())
}

pub fn set_data_path(path: String) -> Result<()> {
    let path = Utf8PathBuf::from(&path);
    if !is_valid_data_path(&path) {
        eprintln!();
        eprintln!("{}", "✗ Invalid data directory".bright_red().bold());
        eprintln!();
        eprintln!(
            "  {}",
            format!(
                "The directory must contain {} and {}.",
                HEROES_FILE, NORMALIZED_HEROES_FILE
            )
            .bright_yellow()
        );
        eprintln!(
            "  {}",
            format!(
                "Strategy documents are read from its {}/ folder.",
                STRATEGY_DIR
            )
            .bright_yellow()
        );
        eprintln!();

        return Err(miette::miette!("Invalid data directory"));
    }

    let mut cfg = config::load_config();
    cfg.data_path = Some(path.clone());
    config::save_config(&cfg).map_err(|e| miette::miette!("Failed to save config: {}", e))?;

    println!("{}", "✓ Data path set successfully!".bright_green().bold());
    println!();
    println!(
        "  {} {}",
        "Path:".bright_white().bold(),
        path.as_str().bright_green()
    );

    Ok(())
}

pub fn reset_config() -> Result<()> {
    if config::load_config() == AppConfig::default() {
        println!("{}", "Configuration already uses the defaults".dimmed());
        return Ok(());
    }

    config::save_config(&AppConfig::default())
        .map_err(|e| miette::miette!("Failed to reset config: {}", e))?;

    println!(
        "{} {}",
        "✓ Configuration reset:".bright_green().bold(),
        config_path_display()
    );

    Ok(())
}
