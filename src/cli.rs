#![cfg(feature = "std")]

//! Text commands for the terminal front end.

use std::str::FromStr;

use crate::{
    config::{fleet_index, BOARD_SIZE},
    ship::Orientation,
};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `place <ship> <coord> [h|v]`
    Place {
        slot: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    },
    /// `random`: auto-deploy the fleet.
    Random,
    Start,
    /// A bare coordinate, or `fire <coord>`.
    Fire { x: usize, y: usize },
    Reset,
    Board,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let head = parts.next().ok_or("Empty input")?;
        let command = match head.to_ascii_lowercase().as_str() {
            "random" | "r" => Command::Random,
            "start" | "s" => Command::Start,
            "reset" => Command::Reset,
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "place" | "p" => {
                let name = parts.next().ok_or("Usage: place <ship> <coord> [h|v]")?;
                let slot = fleet_index(name).ok_or_else(|| format!("Unknown ship '{}'", name))?;
                let coord = parts.next().ok_or("Missing coordinate (e.g., A5)")?;
                let (x, y) = parse_coord(coord)?;
                let orientation = match parts.next() {
                    Some(o) => parse_orientation(o)?,
                    None => Orientation::Horizontal,
                };
                Command::Place {
                    slot,
                    x,
                    y,
                    orientation,
                }
            }
            "fire" | "f" => {
                let coord = parts.next().ok_or("Missing coordinate (e.g., A5)")?;
                let (x, y) = parse_coord(coord)?;
                Command::Fire { x, y }
            }
            _ => {
                let (x, y) = parse_coord(head)?;
                Command::Fire { x, y }
            }
        };
        if let Some(extra) = parts.next() {
            return Err(format!("Unexpected '{}'", extra));
        }
        Ok(command)
    }
}

/// Parse `<column letter><row number>` into `(x, y)`; `A1` is `(0, 0)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let mut chars = input.trim().chars();
    let col_ch = chars
        .next()
        .ok_or("Empty coordinate")?
        .to_ascii_uppercase();
    let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str = chars.as_str();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_SIZE))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_SIZE));
    }
    Ok((x, row - 1))
}

pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" | "x" => Ok(Orientation::Horizontal),
        "v" | "vertical" | "y" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

/// `(x, y)` back to `A1` notation.
pub fn coord_label(x: usize, y: usize) -> String {
    format!("{}{}", (b'A' + x as u8) as char, y + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_map_column_to_x_and_row_to_y() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("c7"), Ok((2, 6)));
        assert_eq!(parse_coord("J10"), Ok((9, 9)));
        assert_eq!(coord_label(9, 9), "J10");
    }

    #[test]
    fn bad_coords_are_rejected() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
        assert!(parse_coord("Ä1").is_err());
    }

    #[test]
    fn place_command() {
        assert_eq!(
            "place submarine B3 v".parse::<Command>(),
            Ok(Command::Place {
                slot: 3,
                x: 1,
                y: 2,
                orientation: Orientation::Vertical,
            })
        );
        assert_eq!(
            "p destroyer a1".parse::<Command>(),
            Ok(Command::Place {
                slot: 4,
                x: 0,
                y: 0,
                orientation: Orientation::Horizontal,
            })
        );
        assert!("place dinghy A1".parse::<Command>().is_err());
        assert!("place carrier A1 diagonal".parse::<Command>().is_err());
    }

    #[test]
    fn bare_coordinate_fires() {
        assert_eq!("E5".parse::<Command>(), Ok(Command::Fire { x: 4, y: 4 }));
        assert_eq!("fire e5".parse::<Command>(), Ok(Command::Fire { x: 4, y: 4 }));
        assert!("E5 E6".parse::<Command>().is_err());
    }

    #[test]
    fn keywords() {
        assert_eq!("random".parse::<Command>(), Ok(Command::Random));
        assert_eq!("START".parse::<Command>(), Ok(Command::Start));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert!("".parse::<Command>().is_err());
    }
}
