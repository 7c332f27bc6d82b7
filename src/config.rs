/// Side length of the square playing field.
pub const BOARD_SIZE: usize = 6;

/// Lengths of the ships each side places, longest first.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total placement attempts allowed across one fleet before the board is
/// discarded and generation starts over.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 2000;
