use camino::Utf8PathBuf;
use colored::Colorize;

use crate::println_pad;
use crate::utils::load_data;

pub struct ListHeroesArgs {
    pub data_path: Utf8PathBuf,
    pub query: Option<String>,
}

pub fn list_heroes(args: ListHeroesArgs) -> miette::Result<()> {
    let data = load_data(args.data_path)?;
    let query = args.query.unwrap_or_default();

    let mut shown = 0;
    for hero in data.catalog().find(&query) {
        shown += 1;

        let marker = if data.strategies().contains(hero.id()) {
            "✓".bright_green()
        } else {
            "·".dimmed()
        };
        let aliases = if hero.aliases().is_empty() {
            String::new()
        } else {
            format!("({})", hero.aliases().join(", "))
        };

        println_pad!(
            "{} {} {} {}",
            marker,
            hero.display_name().bright_cyan().bold(),
            hero.id().as_str().dimmed(),
            aliases.bright_white()
        );
    }

    if shown == 0 {
        println_pad!("{}", format!("No heroes match '{}'", query).bright_yellow());
    } else {
        println_pad!(
            "\n{} {}",
            format!("{} heroes", shown).bright_white().bold(),
            "(✓ = strategy data available)".dimmed()
        );
    }

    Ok(())
}
