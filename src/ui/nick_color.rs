//! Deterministic nickname color bucketing.
//!
//! A nickname always maps to the same one of six palette slots, within a
//! session and across runs. The hash is the classic `h = h * 31 + c` fold
//! over UTF-16 code units with 32-bit wrapping, so it matches the
//! `((h << 5) - h + c) | 0` form seen in browser chat clients bit for bit.

pub const PALETTE_SIZE: usize = 6;

pub fn nick_hash(nick: &str) -> i32 {
    nick.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Palette slot for `nick`, always in `0..PALETTE_SIZE`.
pub fn palette_slot(nick: &str) -> usize {
    slot_for_hash(nick_hash(nick))
}

// `unsigned_abs` keeps `i32::MIN` in range; a plain `abs` wraps back to a
// negative value there and would index out of the palette.
fn slot_for_hash(hash: i32) -> usize {
    (hash.unsigned_abs() % PALETTE_SIZE as u32) as usize
}
