//! Plain-text formatting for result panels.

use serde::Serialize;

/// Placeholder shown for a panel with no lines.
pub const NO_INFORMATION: &str = "- No information available.";

/// Placeholder for a counter-item panel when no enemy tip names a known item.
pub const NO_COUNTER_ITEMS: &str = "No specific item counters found.";

/// What a panel shows. Decides the default line cap and the empty placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    /// General tips for an allied hero.
    Tips,
    /// Item suggestions for an allied hero.
    Items,
    /// How to play against an enemy hero.
    CounterTips,
    /// Counter items named across the enemy team.
    CounterItems,
}

impl PanelKind {
    /// Lines shown when the caller does not set a cap.
    pub fn max_lines(self) -> usize {
        match self {
            PanelKind::CounterTips => 3,
            PanelKind::Tips | PanelKind::Items | PanelKind::CounterItems => 5,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            PanelKind::CounterItems => NO_COUNTER_ITEMS,
            PanelKind::Tips | PanelKind::Items | PanelKind::CounterTips => NO_INFORMATION,
        }
    }
}

/// A titled block of text lines, ready to be shown by a presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Panel {
    pub fn new(kind: PanelKind, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            lines,
        }
    }

    /// The panel body as a bullet list of at most `max_lines` lines, or the
    /// kind's placeholder when there is nothing to show.
    pub fn body(&self, max_lines: usize) -> String {
        if self.lines.is_empty() {
            return format!("{}\n", self.kind.empty_message());
        }
        bullet_list(&self.lines, max_lines)
    }

    /// [`body`](Self::body) capped at the kind's default.
    pub fn default_body(&self) -> String {
        self.body(self.kind.max_lines())
    }
}

/// Format lines as a bullet list, keeping at most `max_bullets` of them.
///
/// An empty list renders as [`NO_INFORMATION`]. Every line, including the last,
/// ends with a newline.
pub fn bullet_list<S: AsRef<str>>(lines: &[S], max_bullets: usize) -> String {
    if lines.is_empty() {
        return format!("{NO_INFORMATION}\n");
    }

    lines
        .iter()
        .take(max_bullets)
        .map(|line| format!("• {}\n", line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bullet_list() {
        let lines = ["Blink in", "Call", "Culling Blade"];
        assert_eq!(bullet_list(&lines, 5), "• Blink in\n• Call\n• Culling Blade\n");
        assert_eq!(bullet_list(&lines, 2), "• Blink in\n• Call\n");
    }

    #[test]
    fn test_bullet_list_empty() {
        let lines: [&str; 0] = [];
        assert_eq!(bullet_list(&lines, 5), "- No information available.\n");
    }

    #[test]
    fn test_panel_body() {
        let panel = Panel::new(PanelKind::Tips, "Tips for Axe", lines(&["Blink in"]));
        assert_eq!(panel.body(3), "• Blink in\n");
    }

    #[test]
    fn test_default_caps_per_kind() {
        let tips = lines(&["one", "two", "three", "four", "five", "six"]);

        let ally = Panel::new(PanelKind::Tips, "Tips for Axe", tips.clone());
        assert_eq!(ally.default_body().lines().count(), 5);

        let enemy = Panel::new(PanelKind::CounterTips, "How to counter Axe", tips);
        assert_eq!(enemy.default_body(), "• one\n• two\n• three\n");
    }

    #[test]
    fn test_empty_message_per_kind() {
        let items = Panel::new(PanelKind::CounterItems, "Item Suggestions", Vec::new());
        assert_eq!(items.default_body(), "No specific item counters found.\n");

        let counters = Panel::new(PanelKind::CounterTips, "How to counter Axe", Vec::new());
        assert_eq!(counters.body(1), "- No information available.\n");
    }
}
