mod attacks;
mod executor;
mod game_end;
mod legality;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;
mod tables;

#[cfg(test)]
mod tests;

pub use game_end::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::*;
pub use position::*;
pub use square::*;
