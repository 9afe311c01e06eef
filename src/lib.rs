pub mod ble;
pub mod config;
pub mod consts;
pub mod service;
pub mod state;
pub mod uuids;
