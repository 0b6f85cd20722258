use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::One)
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player as u8
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player 1",
            Player::Two => "player 2",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "1" | "one" => Ok(Player::One),
            "2" | "two" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: 1, 2, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Player::ALL.contains(&Player::random()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Player::One, Player::from_str("1").unwrap());
        assert_eq!(Player::Two, Player::from_str("two").unwrap());
        assert!(Player::from_str("three").is_err());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_player_into_u8() {
        assert_eq!(u8::from(Player::One), 0);
        assert_eq!(u8::from(Player::Two), 1);
        assert_eq!(Player::Two.index(), 1);
    }
}
