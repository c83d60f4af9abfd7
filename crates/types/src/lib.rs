//! Shared types - data structures and constants used by every crate
//!
//! Everything here is plain data with no external dependencies, so the core
//! rules, the terminal front end, and the headless presenter can all agree on
//! the same vocabulary.
//!
//! # Palette
//!
//! Rounds draw their colors from a fixed palette of ten entries:
//!
//! | Name | Hex |
//! |------|-----|
//! | Red | `#FF0000` |
//! | Green | `#00FF00` |
//! | Blue | `#0000FF` |
//! | Yellow | `#FFFF00` |
//! | Cyan | `#00FFFF` |
//! | Magenta | `#FF00FF` |
//! | Gray | `#808080` |
//! | Charcoal | `#333333` |
//! | Orange | `#FFA500` |
//! | Salmon | `#E9967A` |
//!
//! # Examples
//!
//! ```
//! use cup_match_types::{Color, GameCommand, Phase, PALETTE, PALETTE_SIZE};
//!
//! assert_eq!(PALETTE.len(), PALETTE_SIZE);
//! assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
//!
//! let cmd = GameCommand::parse("swap 0 2").unwrap();
//! assert_eq!(cmd, GameCommand::Swap(0, 2));
//!
//! assert!(Phase::Won.is_terminal());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of entries in the fixed palette.
pub const PALETTE_SIZE: usize = 10;

/// Smallest item count the core accepts.
pub const MIN_ITEM_COUNT: usize = 1;

/// Largest item count the core accepts (one item per palette color).
pub const MAX_ITEM_COUNT: usize = PALETTE_SIZE;

/// Smallest item count offered by the item-count choosers.
pub const MIN_CHOOSER_ITEMS: usize = 3;

/// Item count used when nothing else is configured.
pub const DEFAULT_ITEM_COUNT: usize = 3;

/// Points per item on a win (canonical rules).
pub const POINTS_PER_ITEM: u32 = 20;

/// Checks per item a player is expected to need.
pub const EXPECTED_CHECKS_PER_ITEM: u32 = 2;

/// Points lost for every check above the expected number.
pub const PENALTY_PER_CHECK: u32 = 5;

/// Points gained for every check below the expected number.
pub const BONUS_PER_CHECK: u32 = 10;

/// Minimum score for a won round (canonical rules).
pub const WIN_SCORE_FLOOR: u32 = 10;

/// An item color drawn from the fixed palette.
///
/// Colors compare by their hex identifier; the name and RGB triple are
/// presentation conveniences.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Color {
    hex: &'static str,
    name: &'static str,
    rgb: (u8, u8, u8),
}

impl Color {
    pub const RED: Color = Color::new("#FF0000", "red", (0xFF, 0x00, 0x00));
    pub const GREEN: Color = Color::new("#00FF00", "green", (0x00, 0xFF, 0x00));
    pub const BLUE: Color = Color::new("#0000FF", "blue", (0x00, 0x00, 0xFF));
    pub const YELLOW: Color = Color::new("#FFFF00", "yellow", (0xFF, 0xFF, 0x00));
    pub const CYAN: Color = Color::new("#00FFFF", "cyan", (0x00, 0xFF, 0xFF));
    pub const MAGENTA: Color = Color::new("#FF00FF", "magenta", (0xFF, 0x00, 0xFF));
    pub const GRAY: Color = Color::new("#808080", "gray", (0x80, 0x80, 0x80));
    pub const CHARCOAL: Color = Color::new("#333333", "charcoal", (0x33, 0x33, 0x33));
    pub const ORANGE: Color = Color::new("#FFA500", "orange", (0xFF, 0xA5, 0x00));
    pub const SALMON: Color = Color::new("#E9967A", "salmon", (0xE9, 0x96, 0x7A));

    const fn new(hex: &'static str, name: &'static str, rgb: (u8, u8, u8)) -> Self {
        Self { hex, name, rgb }
    }

    /// Uppercase `#RRGGBB` identifier.
    pub fn hex(&self) -> &'static str {
        self.hex
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// Look up a palette color by hex identifier (case-insensitive).
    ///
    /// ```
    /// use cup_match_types::Color;
    ///
    /// assert_eq!(Color::from_hex("#e9967a"), Some(Color::SALMON));
    /// assert_eq!(Color::from_hex("#123456"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|c| c.hex.eq_ignore_ascii_case(s))
    }

    /// Look up a palette color by name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(s))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex)
    }
}

/// The fixed palette, in reference order.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
    Color::GRAY,
    Color::CHARCOAL,
    Color::ORANGE,
    Color::SALMON,
];

/// Round phase.
///
/// `Playing` is the only phase that accepts swap/check/give-up. The two
/// terminal phases hold until the next round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    GaveUp,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// The outcome a terminal phase represents.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Playing => None,
            Phase::Won => Some(Outcome::Won),
            Phase::GaveUp => Some(Outcome::GaveUp),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::GaveUp => "gaveUp",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    GaveUp,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::GaveUp => "gaveUp",
        }
    }
}

/// Commands a presentation layer sends to the controller.
///
/// Both swap gestures (drag and click-select) reduce to [`GameCommand::Swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Start a fresh round with this many items.
    StartRound(usize),
    /// Exchange two positions of the player arrangement.
    Swap(usize, usize),
    /// Compare the player arrangement against the target.
    Check,
    /// Concede the round and reveal the target.
    GiveUp,
}

impl GameCommand {
    /// Parse a whitespace-separated command line.
    ///
    /// Accepted forms: `start N`, `swap I J`, `check`, `giveup` (also `give-up`).
    ///
    /// ```
    /// use cup_match_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::parse("start 5"), Some(GameCommand::StartRound(5)));
    /// assert_eq!(GameCommand::parse("CHECK"), Some(GameCommand::Check));
    /// assert_eq!(GameCommand::parse("give-up"), Some(GameCommand::GiveUp));
    /// assert_eq!(GameCommand::parse("swap 1"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts.next()?.to_ascii_lowercase();
        let cmd = match verb.as_str() {
            "start" => GameCommand::StartRound(parts.next()?.parse().ok()?),
            "swap" => {
                let i = parts.next()?.parse().ok()?;
                let j = parts.next()?.parse().ok()?;
                GameCommand::Swap(i, j)
            }
            "check" => GameCommand::Check,
            "giveup" | "give-up" => GameCommand::GiveUp,
            _ => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(cmd)
    }

    /// Short operation name, used in logs and rejection messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::StartRound(_) => "start",
            GameCommand::Swap(_, _) => "swap",
            GameCommand::Check => "check",
            GameCommand::GiveUp => "giveUp",
        }
    }
}

/// Which gesture the presentation layer turns into swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureMode {
    /// Pick an item up and drop it on another slot.
    #[default]
    Drag,
    /// Select one item, then select a second to exchange them.
    ClickSelect,
}

impl GestureMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "drag" => Some(GestureMode::Drag),
            "click" | "clickselect" | "click-select" => Some(GestureMode::ClickSelect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GestureMode::Drag => "drag",
            GestureMode::ClickSelect => "click",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GestureMode::Drag => GestureMode::ClickSelect,
            GestureMode::ClickSelect => GestureMode::Drag,
        }
    }
}
