//! Output formatting for terminal display
//!
//! Pure string builders for the banner, tip cards, menus and listings. Callers
//! decide where the text goes.

use crate::menu::MenuOption;
use crate::query::{CategoryCount, Stats};
use crate::store::Tip;
use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// Inner width of a tip card
const CARD_WIDTH: usize = 62;

/// Width available for wrapped content inside a card
const WRAP_WIDTH: usize = CARD_WIDTH - 4;

pub const BANNER: &str = r"
╔══════════════════════════════════════════════════════════════╗
║     _   _           _                                        ║
║    | |_(_)_ __  ___| |_ ___ _ __                             ║
║    | __| | '_ \/ __| __/ _ \ '__|                            ║
║    | |_| | |_) \__ \ ||  __/ |                               ║
║     \__|_| .__/|___/\__\___|_|                               ║
║          |_|                                                 ║
║                    Tips & Tricks Terminal                    ║
╚══════════════════════════════════════════════════════════════╝
";

/// The banner, colored
#[must_use]
pub fn banner() -> String {
    BANNER.cyan().to_string()
}

/// Display color for well-known categories
#[must_use]
pub fn category_color(category: &str) -> Color {
    match category {
        "Best Practices" => Color::Green,
        "Security" | "Debugging" => Color::Red,
        "Testing" => Color::Yellow,
        "Chat Features" | "AI Features" => Color::Cyan,
        "Editor Tips" | "MCP" => Color::Magenta,
        "Enterprise" => Color::Blue,
        _ => Color::BrightBlack,
    }
}

/// Icon for well-known categories
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Best Practices" => "⭐",
        "Security" => "🔒",
        "Testing" => "🧪",
        "Chat Features" => "💬",
        "Editor Tips" => "✏️",
        "Enterprise" => "🏢",
        "Debugging" => "🐛",
        "AI Features" => "🤖",
        "MCP" => "🔌",
        _ => "📌",
    }
}

/// Greedy word wrap to at most `width` terminal columns per line
///
/// Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = line.width() + 1 + word.width();
        if !line.is_empty() && needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pad with spaces to `width` terminal columns
fn pad(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

fn rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "─".repeat(CARD_WIDTH))
}

/// A tip rendered as a boxed card
#[must_use]
pub fn tip_card(tip: &Tip) -> String {
    let mut out = Vec::new();
    out.push(rule('┌', '┐'));

    let heading = pad(&format!("  💡 TIP #{}: {}", tip.id, tip.title), CARD_WIDTH);
    out.push(format!("│{}│", heading.bold()));
    out.push(rule('├', '┤'));

    for line in wrap(&tip.content, WRAP_WIDTH) {
        out.push(format!("│  {}│", pad(&line, CARD_WIDTH - 2)));
    }

    out.push(rule('├', '┤'));
    let footer = pad(&format!("  📂 Category: {}", tip.category), CARD_WIDTH);
    out.push(format!("│{}│", footer.color(category_color(&tip.category))));
    out.push(rule('└', '┘'));

    format!("\n{}", out.join("\n"))
}

/// The main menu
#[must_use]
pub fn menu(options: &[MenuOption]) -> String {
    let mut out = vec![
        String::new(),
        "╔════════════════════════════════╗".cyan().to_string(),
        format!("{}     {}              {}", "║".cyan(), "🎯 MAIN MENU".bold(), "║".cyan()),
        "╚════════════════════════════════╝".cyan().to_string(),
        String::new(),
    ];
    for option in options {
        out.push(format!("  {} {} {}", format!("[{}]", option.key).bold(), option.icon, option.label));
    }
    out.push(String::new());
    out.push("💡 Type to filter or enter choice:".dimmed().to_string());
    out.join("\n")
}

/// Category listing with counts
#[must_use]
pub fn category_list(categories: &[CategoryCount]) -> String {
    let mut out = vec![
        format!("\n{}", "📚 Tip Categories".cyan()),
        "─".repeat(40),
    ];
    for category in categories {
        out.push(format!(
            "  {} {} {}",
            category_icon(&category.name),
            category.name.bold(),
            format!("({} tips)", category.count).dimmed()
        ));
    }
    out.join("\n")
}

/// One line per search hit
#[must_use]
pub fn search_results(keyword: &str, results: &[&Tip]) -> String {
    let mut out = vec![format!(
        "\n{} {}",
        format!("🔍 Found {} tip(s) matching", results.len()).cyan(),
        format!("\"{keyword}\"").bold()
    )];
    out.push("─".repeat(40));
    for tip in results {
        out.push(format!(
            "  {} {} {}",
            format!("#{}", tip.id).bold(),
            tip.title,
            format!("[{}]", tip.category).color(category_color(&tip.category))
        ));
    }
    out.join("\n")
}

/// Statistics block
#[must_use]
pub fn statistics(stats: &Stats) -> String {
    let mut out = vec![
        format!("\n{}", "📊 Statistics".cyan()),
        "─".repeat(40),
        format!("  📝 Total tips: {}", stats.total.to_string().bold()),
        format!("  👀 Tips viewed this session: {}", stats.shown.to_string().bold()),
        format!("  📚 Categories: {}", stats.categories.to_string().bold()),
        format!("  📈 Session progress: {}", format!("{}%", stats.completion).bold()),
    ];
    if let Some(top) = &stats.top_category {
        out.push(format!("  🏆 Top category: {} ({} tips)", top.name.bold(), top.count));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let text = "Use slash commands in chat to scope the question to the current workspace or file";
        let lines = wrap(text, 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.width() <= 20));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_long_word_alone() {
        let lines = wrap("a supercalifragilisticexpialidocious b", 10);
        assert_eq!(lines, vec!["a", "supercalifragilisticexpialidocious", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_tip_card_contains_fields() {
        let tip = Tip::new(7, "Pin files", "Keep relevant files open as context", "Editor Tips");
        let card = tip_card(&tip);
        assert!(card.contains("TIP #7: Pin files"));
        assert!(card.contains("Keep relevant files open as context"));
        assert!(card.contains("Category: Editor Tips"));
    }

    #[test]
    fn test_pad_counts_wide_glyphs_as_two_columns() {
        let padded = pad("💡 a", 6);
        assert_eq!(padded, "💡 a  ");
        assert_eq!(padded.width(), 6);
    }

    #[test]
    fn test_tip_card_borders_line_up() {
        let tip = Tip::new(3, "Dice", "Roll 🎲 again and 📂 open the folder", "Testing");
        let card = tip_card(&tip);
        let plain: Vec<&str> = card
            .lines()
            .filter(|line| line.starts_with('┌') || line.starts_with("│  Roll"))
            .collect();

        assert_eq!(plain.len(), 2);
        assert!(plain.iter().all(|line| line.width() == CARD_WIDTH + 2));
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(category_icon("Something Else"), "📌");
        assert_eq!(category_color("Something Else"), Color::BrightBlack);
    }
}
