use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use ble_peripheral_rust::gatt::peripheral_event::PeripheralEvent;

use blexample::ble::ble_owner_task;
use blexample::config::Args;
use blexample::consts::*;
use blexample::uuids::to_uuid;

fn print_uuids() {
    for (label, raw) in [
        ("service", &UUID_SVC_EXAMPLE),
        ("counter", &UUID_CHR_COUNTER),
        ("toggle", &UUID_CHR_TOGGLE),
        ("data", &UUID_CHR_DATA),
    ] {
        println!("{label:<8} {}", to_uuid(raw));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.print_uuids {
        print_uuids();
        return Ok(());
    }

    let (evt_tx, evt_rx) = mpsc::channel::<PeripheralEvent>(256);
    ble_owner_task(evt_rx, evt_tx, args).await
}
