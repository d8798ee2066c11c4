//! Input bounds enforced at the presentation boundary.
//!
//! Generators assume validated input; values arriving from the UI are
//! clamped here first.

pub const MIN_ARRAY_SIZE: usize = 4;
pub const MAX_ARRAY_SIZE: usize = 15;
pub const DEFAULT_ARRAY_SIZE: usize = 8;

/// Values of randomly generated arrays fall in `1..=MAX_ARRAY_VALUE`.
pub const MAX_ARRAY_VALUE: u32 = 100;

pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 1000;
pub const DEFAULT_SPEED_MS: u64 = 500;

pub const MIN_DISKS: u32 = 2;
pub const MAX_DISKS: u32 = 10;
pub const DEFAULT_DISKS: u32 = 3;

pub const MIN_QUEENS: usize = 4;
pub const MAX_QUEENS: usize = 10;
pub const DEFAULT_QUEENS: usize = 4;

/// Elements a stack, queue, list or tree may hold before inserts are refused.
pub const MAX_STRUCTURE_ITEMS: usize = 32;

pub fn clamp_array_size(size: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
}

pub fn clamp_speed_ms(ms: u64) -> u64 {
    ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

pub fn clamp_disks(disks: u32) -> u32 {
    disks.clamp(MIN_DISKS, MAX_DISKS)
}

pub fn clamp_queens(size: usize) -> usize {
    size.clamp(MIN_QUEENS, MAX_QUEENS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(clamp_array_size(0), MIN_ARRAY_SIZE);
        assert_eq!(clamp_array_size(99), MAX_ARRAY_SIZE);
        assert_eq!(clamp_speed_ms(5), MIN_SPEED_MS);
        assert_eq!(clamp_speed_ms(750), 750);
        assert_eq!(clamp_disks(1), MIN_DISKS);
        assert_eq!(clamp_queens(12), MAX_QUEENS);
    }
}
