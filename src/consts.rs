// Identifiers for the example service and device identity

// Custom 128-bit identifiers are stored least-significant byte first, so the
// service below is reported as cf636ca6-ab07-4506-bc67-93192fb9da18.
//
// Characteristics follow an informal enumeration: bytes 4..16 are copied from
// the service (the base) and bytes 0..4 count up from 1. Only the literals
// below are authoritative.

/// Custom service.
pub const UUID_SVC_EXAMPLE: [u8; 16] = [
    0x18, 0xDA, 0xB9, 0x2F, 0x19, 0x93, 0x67, 0xBC, 0x06, 0x45, 0x07, 0xAB, 0xA6, 0x6C, 0x63, 0xCF,
];

/// Counter characteristic (read, notify).
pub const UUID_CHR_COUNTER: [u8; 16] = [
    0x01, 0x00, 0x00, 0x00, 0x19, 0x93, 0x67, 0xBC, 0x06, 0x45, 0x07, 0xAB, 0xA6, 0x6C, 0x63, 0xCF,
];

/// Toggle characteristic (read, write).
pub const UUID_CHR_TOGGLE: [u8; 16] = [
    0x02, 0x00, 0x00, 0x00, 0x19, 0x93, 0x67, 0xBC, 0x06, 0x45, 0x07, 0xAB, 0xA6, 0x6C, 0x63, 0xCF,
];

/// Data characteristic (read, write).
pub const UUID_CHR_DATA: [u8; 16] = [
    0x03, 0x00, 0x00, 0x00, 0x19, 0x93, 0x67, 0xBC, 0x06, 0x45, 0x07, 0xAB, 0xA6, 0x6C, 0x63, 0xCF,
];

pub const UUID_DIS_SERVICE: u16 = 0x180A;
pub const UUID_MFG_NAME: u16 = 0x2A29;
pub const UUID_MODEL_NUM: u16 = 0x2A24;

pub const UUID_USER_DESC: u16 = 0x2901;

pub const DEFAULT_DEVICE_NAME: &str = "Example";
pub const DEFAULT_MANUFACTURER: &str = "Example Devices";
pub const DEFAULT_MODEL: &str = "Example-1";
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

// Fits a single ATT write at the default MTU (23 - 3)
pub const DATA_MAX_LEN: usize = 20;
