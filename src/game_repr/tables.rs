use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::Square;

/// Jump targets from one square; a knight or king has at most eight.
pub type JumpTargets = SmallVec<[Square; 8]>;

/// Linear index offsets of the eight knight jumps.
pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Linear index offsets of the eight king steps.
pub const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// (file delta, rank delta) of the four orthogonal rays.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// (file delta, rank delta) of the four diagonal rays.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// KNIGHT_TARGETS[square] lists every square a knight on `square` can jump to
pub static KNIGHT_TARGETS: Lazy<[JumpTargets; 64]> =
    Lazy::new(|| jump_table(&KNIGHT_OFFSETS, |df, dr| (df == 1 && dr == 2) || (df == 2 && dr == 1)));

/// KING_TARGETS[square] lists every square a king on `square` can step to
pub static KING_TARGETS: Lazy<[JumpTargets; 64]> =
    Lazy::new(|| jump_table(&KING_OFFSETS, |df, dr| df <= 1 && dr <= 1));

/// Builds a jump table from linear offsets. An offset only counts if the
/// actual file/rank delta matches the jump shape, which rejects targets that
/// wrapped around a board edge.
fn jump_table(offsets: &[i32], shape: fn(u8, u8) -> bool) -> [JumpTargets; 64] {
    std::array::from_fn(|idx| {
        let from = Square::new(idx as u8);
        offsets
            .iter()
            .filter_map(|&offset| Square::try_new(idx as i32 + offset))
            .filter(|&to| shape(from.file_distance(to), from.row_distance(to)))
            .collect()
    })
}
