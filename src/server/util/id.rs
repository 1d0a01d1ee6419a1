//! Opaque 12 byte identifiers, hex-encoded to 24 characters.
//!
//! Generated IDs are laid out as 4 bytes of big-endian Unix seconds, 5 random bytes chosen
//! once per process, and a 3 byte big-endian counter starting at a random value. IDs created
//! by the same process are therefore unique and roughly ordered by creation time, while IDs
//! created by different processes are very unlikely to collide.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    OnceLock,
};

use chrono::Utc;

/// Number of characters in a hex-encoded identifier.
pub const ID_LENGTH: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

struct IdState {
    process_unique: [u8; 5],
    counter: AtomicU32,
}

static ID_STATE: OnceLock<IdState> = OnceLock::new();

fn id_state() -> &'static IdState {
    ID_STATE.get_or_init(|| IdState {
        process_unique: rand::random(),
        counter: AtomicU32::new(rand::random::<u32>() & COUNTER_MASK),
    })
}

/// Generates a new identifier.
///
/// # Returns
/// A 24 character lowercase hex string, unique within this process.
pub fn generate_id() -> String {
    let state = id_state();
    let seconds = Utc::now().timestamp() as u32;
    let count = state.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..9].copy_from_slice(&state.process_unique);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Validates an identifier received from a client.
///
/// Upper-case hex digits are accepted and normalized to lower case so lookups match IDs
/// generated by [`generate_id`].
///
/// # Arguments
/// - `id` - Identifier from a request path or body
///
/// # Returns
/// - `Some(String)` - The normalized identifier
/// - `None` - `id` is not exactly 24 hexadecimal characters
pub fn parse_id(id: &str) -> Option<String> {
    if id.len() != ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(id.to_ascii_lowercase())
}
