use core::time::Duration;

use crate::bitboard::BitBoard;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
/// Shortest ship a board accepts.
pub const MIN_SHIP_LENGTH: usize = 2;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in a full fleet.
pub const FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Cell set sized for the game board.
pub type Mask = BitBoard<u128, BOARD_SIZE>;

/// Pause before the computer fires.
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(1000);

pub const DELAY_ENV: &str = "BROADSIDE_DELAY_MS";
pub const SEED_ENV: &str = "BROADSIDE_SEED";

/// Fleet slot for a ship name, ignoring case.
pub fn fleet_index(name: &str) -> Option<usize> {
    FLEET.iter().position(|def| def.name().eq_ignore_ascii_case(name))
}

/// Runtime settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// How long the computer "thinks" before firing back.
    pub opponent_delay: Duration,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_delay: DEFAULT_OPPONENT_DELAY,
            seed: None,
        }
    }
}

#[cfg(feature = "std")]
impl GameConfig {
    /// Read `BROADSIDE_DELAY_MS` and `BROADSIDE_SEED`, keeping defaults for
    /// anything unset or malformed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<std::string::String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.opponent_delay = Duration::from_millis(ms),
                Err(_) => log::warn!("ignoring {}={:?}: not a number of milliseconds", DELAY_ENV, raw),
            }
        }
        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("ignoring {}={:?}: not an unsigned integer", SEED_ENV, raw),
            }
        }
        config
    }
}
