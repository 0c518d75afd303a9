//! Deterministic overlap-avoidance offsets.
//!
//! The offset is a pure function of a seed. With [`JitterSource::Index`] the
//! seed is the item's position in the input sequence, so re-sorting the input
//! moves points; [`JitterSource::IdHash`] seeds from the id instead.

use ras_core::config::JitterSource;

/// Seed for the item at `index` with id `id`.
pub fn seed(source: JitterSource, index: usize, id: &str) -> u64 {
    match source {
        JitterSource::Index => index as u64,
        JitterSource::IdHash => id_seed(id),
    }
}

/// First eight bytes of the blake3 hash of the id.
pub fn id_seed(id: &str) -> u64 {
    let hash = blake3::hash(id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Horizontal offset in `-4..=4`: `seed mod 5`, negated for odd seeds.
pub fn x_offset(seed: u64) -> f64 {
    let magnitude = (seed % 5) as f64;
    if seed % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Vertical offset in `-2..=0`: `seed mod 3`, negated unless `seed mod 3 == 0`.
pub fn y_offset(seed: u64) -> f64 {
    let magnitude = (seed % 3) as f64;
    if seed % 3 == 0 {
        magnitude
    } else {
        -magnitude
    }
}
