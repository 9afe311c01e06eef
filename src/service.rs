use uuid::Uuid;

use ble_peripheral_rust::{
    gatt::{
        characteristic::Characteristic,
        descriptor::Descriptor,
        properties::{AttributePermission, CharacteristicProperty},
        service::Service,
    },
    uuid::ShortUuid,
};

use crate::consts::*;
use crate::uuids::{CHR_COUNTER, CHR_DATA, CHR_TOGGLE, SVC_EXAMPLE};

fn user_description(name: &str) -> Descriptor {
    Descriptor {
        uuid: Uuid::from_short(UUID_USER_DESC),
        value: Some(name.as_bytes().to_vec()),
        ..Default::default()
    }
}

// Values are served from ExampleState through read requests, so none are
// cached on the characteristics themselves.
pub fn build_example_service() -> Service {
    Service {
        uuid: SVC_EXAMPLE,
        primary: true,
        characteristics: vec![
            Characteristic {
                uuid: CHR_COUNTER,
                properties: vec![CharacteristicProperty::Read, CharacteristicProperty::Notify],
                permissions: vec![AttributePermission::Readable],
                descriptors: vec![user_description("Counter")],
                ..Default::default()
            },
            Characteristic {
                uuid: CHR_TOGGLE,
                properties: vec![CharacteristicProperty::Read, CharacteristicProperty::Write],
                permissions: vec![
                    AttributePermission::Readable,
                    AttributePermission::Writeable,
                ],
                descriptors: vec![user_description("Toggle")],
                ..Default::default()
            },
            Characteristic {
                uuid: CHR_DATA,
                properties: vec![CharacteristicProperty::Read, CharacteristicProperty::Write],
                permissions: vec![
                    AttributePermission::Readable,
                    AttributePermission::Writeable,
                ],
                descriptors: vec![user_description("Data")],
                ..Default::default()
            },
        ],
    }
}

pub fn build_dis_service(manufacturer: &str, model: &str) -> Service {
    Service {
        uuid: Uuid::from_short(UUID_DIS_SERVICE),
        primary: true,
        characteristics: vec![
            Characteristic {
                uuid: Uuid::from_short(UUID_MFG_NAME),
                properties: vec![CharacteristicProperty::Read],
                permissions: vec![AttributePermission::Readable],
                value: Some(manufacturer.as_bytes().to_vec()),
                ..Default::default()
            },
            Characteristic {
                uuid: Uuid::from_short(UUID_MODEL_NUM),
                properties: vec![CharacteristicProperty::Read],
                permissions: vec![AttributePermission::Readable],
                value: Some(model.as_bytes().to_vec()),
                ..Default::default()
            },
        ],
    }
}
