use ble_peripheral_rust::gatt::peripheral_event::RequestResponse;
use uuid::Uuid;

use crate::consts::DATA_MAX_LEN;
use crate::uuids::{CHR_COUNTER, CHR_DATA, CHR_TOGGLE};

/// Current values of the example service characteristics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExampleState {
    pub counter: u32,
    pub toggle: bool,
    pub data: Vec<u8>,
}

impl ExampleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter_bytes(&self) -> [u8; 4] {
        self.counter.to_le_bytes()
    }

    /// Advances the counter and returns the encoded value to notify.
    pub fn tick(&mut self) -> [u8; 4] {
        self.counter = self.counter.wrapping_add(1);
        self.counter_bytes()
    }

    /// Value of `characteristic` starting at `offset`, as for a long read.
    pub fn read(&self, characteristic: Uuid, offset: u64) -> Result<Vec<u8>, RequestResponse> {
        let value = match characteristic {
            CHR_COUNTER => self.counter_bytes().to_vec(),
            CHR_TOGGLE => vec![self.toggle as u8],
            CHR_DATA => self.data.clone(),
            _ => return Err(RequestResponse::InvalidHandle),
        };
        let offset = usize::try_from(offset).map_err(|_| RequestResponse::InvalidOffset)?;
        if offset > value.len() {
            return Err(RequestResponse::InvalidOffset);
        }
        Ok(value[offset..].to_vec())
    }

    pub fn write(
        &mut self,
        characteristic: Uuid,
        offset: u64,
        value: &[u8],
    ) -> Result<(), RequestResponse> {
        let offset = usize::try_from(offset).map_err(|_| RequestResponse::InvalidOffset)?;
        match characteristic {
            CHR_COUNTER => Err(RequestResponse::RequestNotSupported),
            CHR_TOGGLE => {
                if offset != 0 {
                    return Err(RequestResponse::InvalidOffset);
                }
                let [b] = value else {
                    return Err(RequestResponse::UnlikelyError);
                };
                self.toggle = *b != 0;
                Ok(())
            }
            CHR_DATA => {
                let end = offset
                    .checked_add(value.len())
                    .ok_or(RequestResponse::InvalidOffset)?;
                if offset > self.data.len() || end > DATA_MAX_LEN {
                    return Err(RequestResponse::InvalidOffset);
                }
                self.data.truncate(offset);
                self.data.extend_from_slice(value);
                Ok(())
            }
            _ => Err(RequestResponse::InvalidHandle),
        }
    }
}
