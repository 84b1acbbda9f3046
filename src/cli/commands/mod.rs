//! Command implementations

use clap::ValueEnum;

use crate::tictactoe::Player;

pub mod benchmark;
pub mod selfplay;
pub mod solve;

/// Player marker as accepted on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MarkerArg {
    X,
    O,
}

impl From<MarkerArg> for Player {
    fn from(marker: MarkerArg) -> Self {
        match marker {
            MarkerArg::X => Player::X,
            MarkerArg::O => Player::O,
        }
    }
}
