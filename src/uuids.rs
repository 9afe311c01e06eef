//! `Uuid` views over the raw identifier tables in [`crate::consts`].

use uuid::Uuid;

use crate::consts::*;

pub const SVC_EXAMPLE: Uuid = to_uuid(&UUID_SVC_EXAMPLE);
pub const CHR_COUNTER: Uuid = to_uuid(&UUID_CHR_COUNTER);
pub const CHR_TOGGLE: Uuid = to_uuid(&UUID_CHR_TOGGLE);
pub const CHR_DATA: Uuid = to_uuid(&UUID_CHR_DATA);

/// Converts a least-significant-byte-first table into a canonical `Uuid`.
pub const fn to_uuid(raw: &[u8; 16]) -> Uuid {
    Uuid::from_u128(u128::from_le_bytes(*raw))
}

/// The 12 bytes shared by a service and its characteristics (stored order).
pub const fn base(raw: &[u8; 16]) -> [u8; 12] {
    let [_, _, _, _, base @ ..] = *raw;
    base
}

/// The per-characteristic counter held in the low four bytes.
pub const fn suffix(raw: &[u8; 16]) -> u32 {
    u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])
}

/// Builds the `index`th family member of `service`.
pub const fn derive_characteristic(service: &[u8; 16], index: u32) -> [u8; 16] {
    let base = u128::from_le_bytes(*service) & !(u32::MAX as u128);
    (base | index as u128).to_le_bytes()
}

/// Human readable name for one of our characteristics.
pub fn characteristic_name(uuid: Uuid) -> Option<&'static str> {
    match uuid {
        CHR_COUNTER => Some("Counter"),
        CHR_TOGGLE => Some("Toggle"),
        CHR_DATA => Some("Data"),
        _ => None,
    }
}
