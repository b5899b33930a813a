//! Menu resolution
//!
//! Maps free-text input to one of a fixed set of actions. Resolution order,
//! first match wins:
//!
//! 1. Exact match on an option key (`1`-`6`, `q`)
//! 2. Label filter: if exactly one option label contains the input, pick it
//! 3. Keyword rules (`search`, `stat`, `quit`/`exit`, ...) in fixed priority
//! 4. Otherwise `MenuError::UnrecognizedChoice`
//!
//! Input is matched case-insensitively and with surrounding whitespace removed.

pub mod error;

pub use error::MenuError;

use std::fmt;

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Show a tip not yet seen this session
    ShowAnother,
    /// Author a new tip
    Create,
    /// List categories with counts
    ListCategories,
    /// Free-text search
    Search,
    /// Collection and session statistics
    ShowStats,
    /// Tip from a randomly chosen category
    RandomCategory,
    /// Leave the program
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ShowAnother => "show-another",
            Self::Create => "create",
            Self::ListCategories => "list-categories",
            Self::Search => "search",
            Self::ShowStats => "show-stats",
            Self::RandomCategory => "random-category",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub action: MenuAction,
}

/// The main menu, in display order
pub const MENU_OPTIONS: [MenuOption; 7] = [
    MenuOption { key: "1", label: "See another tip", icon: "🎲", action: MenuAction::ShowAnother },
    MenuOption { key: "2", label: "Create a new tip", icon: "✨", action: MenuAction::Create },
    MenuOption { key: "3", label: "View all categories", icon: "📚", action: MenuAction::ListCategories },
    MenuOption { key: "4", label: "Search tips", icon: "🔍", action: MenuAction::Search },
    MenuOption { key: "5", label: "Statistics", icon: "📊", action: MenuAction::ShowStats },
    MenuOption { key: "6", label: "Random category", icon: "🎯", action: MenuAction::RandomCategory },
    MenuOption { key: "q", label: "Quit", icon: "👋", action: MenuAction::Quit },
];

/// Keyword fallbacks, tested in order
const KEYWORD_RULES: [(&[&str], MenuAction); 7] = [
    (&["tip"], MenuAction::ShowAnother),
    (&["create", "new"], MenuAction::Create),
    (&["categ"], MenuAction::ListCategories),
    (&["search"], MenuAction::Search),
    (&["stat"], MenuAction::ShowStats),
    (&["random"], MenuAction::RandomCategory),
    (&["quit", "exit"], MenuAction::Quit),
];

/// Options whose label contains `input` or whose key equals it
///
/// Empty input, or input matching nothing, yields the full menu.
#[must_use]
pub fn filter_options(input: &str) -> Vec<&'static MenuOption> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return MENU_OPTIONS.iter().collect();
    }

    let filtered: Vec<&MenuOption> = MENU_OPTIONS
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle) || opt.key == needle)
        .collect();

    if filtered.is_empty() {
        MENU_OPTIONS.iter().collect()
    } else {
        filtered
    }
}

/// Resolve raw input to a menu action
///
/// # Errors
///
/// Returns `MenuError::UnrecognizedChoice` if no rule matches.
pub fn resolve(input: &str) -> Result<MenuAction, MenuError> {
    let normalized = input.trim().to_lowercase();

    if let Some(opt) = MENU_OPTIONS.iter().find(|opt| opt.key == normalized) {
        return Ok(opt.action);
    }

    if let [only] = filter_options(&normalized).as_slice() {
        return Ok(only.action);
    }

    KEYWORD_RULES
        .iter()
        .find(|(words, _)| words.iter().any(|word| normalized.contains(word)))
        .map(|(_, action)| *action)
        .ok_or_else(|| {
            tracing::debug!("Unrecognized menu choice: {input:?}");
            MenuError::UnrecognizedChoice(input.trim().to_string())
        })
}
