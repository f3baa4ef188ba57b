//! Well-known counter items.
//!
//! Authored counter tips often name the item that answers a hero ("Buy a Black
//! King Bar against..."). [`mentioned_items`] reports which of these items a
//! set of tips mentions, so the shell can list them per enemy.

/// Items checked for in counter tips, grouped by what they counter.
pub const COUNTER_ITEMS: &[&str] = &[
    // Defensive and dispel
    "Black King Bar",
    "Linken's Sphere",
    "Lotus Orb",
    "Manta Style",
    "Aeon Disk",
    "Guardian Greaves",
    "Satanic",
    // Evasion and disarm
    "Heaven's Halberd",
    "Butterfly",
    "Solar Crest",
    // Control and lockdown
    "Scythe of Vyse",
    "Abyssal Blade",
    "Gleipnir",
    "Rod of Atos",
    // Silence and mana burn
    "Orchid Malevolence",
    "Bloodthorn",
    "Diffusal Blade",
    // Vision and invisibility
    "Gem of True Sight",
    "Sentry Ward",
    "Dust of Appearance",
    "Monkey King Bar",
    // Damage mitigation and armor
    "Blade Mail",
    "Ghost Scepter",
    "Eul's Scepter of Divinity",
    "Pipe of Insight",
    "Eternal Shroud",
    "Assault Cuirass",
    "Crimson Guard",
    "Shiva's Guard",
    "Eye of Skadi",
    // Break
    "Silver Edge",
    "Khanda",
    "Nullifier",
    "Spirit Vessel",
    // Positioning and escape
    "Force Staff",
    "Hurricane Pike",
    "Blink Dagger",
    // Hero specific
    "Dagon",
    "Hand of Midas",
];

/// Counter items named anywhere in `tips`, ignoring case, in [`COUNTER_ITEMS`] order.
pub fn mentioned_items<S: AsRef<str>>(tips: &[S]) -> Vec<&'static str> {
    let text = tips
        .iter()
        .map(|tip| tip.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    COUNTER_ITEMS
        .iter()
        .copied()
        .filter(|item| text.contains(&item.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentioned_items() {
        let tips = [
            "A black king bar lets you ignore his ultimate.",
            "Force Staff out of Chronosphere is not possible, but Linken's Sphere helps.",
        ];

        assert_eq!(
            mentioned_items(&tips),
            vec!["Black King Bar", "Linken's Sphere", "Force Staff"]
        );
    }

    #[test]
    fn test_no_mentions() {
        let tips: [&str; 1] = ["Gank him early."];
        assert!(mentioned_items(&tips).is_empty());
        assert!(mentioned_items::<&str>(&[]).is_empty());
    }
}
