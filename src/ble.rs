use std::time::Duration;

use tokio::{
    select,
    sync::mpsc,
    time::{Instant, Interval, MissedTickBehavior},
};
use uuid::Uuid;

use ble_peripheral_rust::{
    Peripheral, PeripheralImpl,
    gatt::peripheral_event::{
        PeripheralEvent, ReadRequestResponse, RequestResponse, WriteRequestResponse,
    },
};

use crate::config::Args;
use crate::service::{build_dis_service, build_example_service};
use crate::state::ExampleState;
use crate::uuids::{CHR_COUNTER, SVC_EXAMPLE, characteristic_name};

pub async fn ble_owner_task(
    mut evt_rx: mpsc::Receiver<PeripheralEvent>,
    evt_tx: mpsc::Sender<PeripheralEvent>,
    args: Args,
) -> anyhow::Result<()> {
    let example_service = build_example_service();
    let dis_service = build_dis_service(&args.manufacturer, &args.model);
    let adv_uuids: [Uuid; 1] = [SVC_EXAMPLE];

    let mut peripheral = Peripheral::new(evt_tx).await?;

    // Backoff until powered
    let mut delay_ms = 50u64;
    loop {
        if peripheral.is_powered().await? {
            break;
        }
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        delay_ms = (delay_ms * 2).min(1000);
    }

    peripheral.add_service(&example_service).await?;
    peripheral.add_service(&dis_service).await?;

    peripheral
        .start_advertising(&args.name, &adv_uuids, None)
        .await?;
    let mut advertising = true;
    tracing::info!(name = %args.name, service = %SVC_EXAMPLE, "Advertising");

    let mut state = ExampleState::new();
    let mut counter_notify = false;

    let mut ticker = counter_ticker(Duration::from_millis(args.interval_ms));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        select! {
            ev = evt_rx.recv() => {
                let Some(ev) = ev else { break };
                if let Some(is_powered) = handle_gatt_event(&mut state, &mut counter_notify, ev) {
                    if is_powered && !advertising {
                        if let Err(e) = peripheral.start_advertising(&args.name, &adv_uuids, None).await {
                            tracing::error!(error = %format!("{e:#}"), "advertise start error");
                        } else {
                            advertising = true;
                        }
                    } else if !is_powered && advertising {
                        if let Err(e) = peripheral.stop_advertising().await {
                            tracing::error!(error = %format!("{e:#}"), "advertise stop error");
                        }
                        advertising = false;
                    }
                }
            }
            _ = ticker.tick() => {
                let value = state.tick();
                tracing::trace!(counter = state.counter, "Tick");
                if counter_notify {
                    if let Err(e) = peripheral.update_characteristic(CHR_COUNTER, value.to_vec().into()).await {
                        tracing::warn!(error = %format!("{e:#}"), "counter notify error");
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    if advertising {
        peripheral.stop_advertising().await?;
    }
    Ok(())
}

// First tick one period out so the counter reads 0 until then
fn counter_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Answers read/write requests from `state` and tracks the Counter
/// subscription. Adapter power changes are returned for the caller, which
/// owns advertising; losing power also drops the subscription.
pub fn handle_gatt_event(
    state: &mut ExampleState,
    counter_notify: &mut bool,
    ev: PeripheralEvent,
) -> Option<bool> {
    match ev {
        PeripheralEvent::StateUpdate { is_powered } => {
            tracing::info!(%is_powered, "Adapter powered");
            if !is_powered {
                *counter_notify = false;
            }
            return Some(is_powered);
        }
        PeripheralEvent::CharacteristicSubscriptionUpdate { request, subscribed } => {
            if request.characteristic == CHR_COUNTER {
                *counter_notify = subscribed;
                tracing::info!(%subscribed, "Counter notify");
            } else {
                tracing::debug!(%subscribed, ?request, "Other subscription");
            }
        }
        PeripheralEvent::ReadRequest { request, offset, responder } => {
            let name = characteristic_name(request.characteristic);
            tracing::debug!(?name, ?request, %offset, "ReadRequest");
            let (value, response) = match state.read(request.characteristic, offset) {
                Ok(value) => (value, RequestResponse::Success),
                Err(response) => (Vec::new(), response),
            };
            let _ = responder.send(ReadRequestResponse { value: value.into(), response });
        }
        PeripheralEvent::WriteRequest { request, offset, value, responder } => {
            let name = characteristic_name(request.characteristic);
            tracing::debug!(?name, ?request, %offset, ?value, "WriteRequest");
            let response = match state.write(request.characteristic, offset, &value) {
                Ok(()) => {
                    tracing::info!(toggle = %state.toggle, data_len = state.data.len(), "State updated");
                    RequestResponse::Success
                }
                Err(response) => {
                    tracing::warn!(?name, ?response, "Write rejected");
                    response
                }
            };
            let _ = responder.send(WriteRequestResponse { response });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use ble_peripheral_rust::gatt::peripheral_event::PeripheralRequest;
    use tokio::sync::oneshot;

    use crate::uuids::{CHR_DATA, CHR_TOGGLE};

    fn request(characteristic: Uuid) -> PeripheralRequest {
        PeripheralRequest {
            client: "test-client".to_string(),
            service: SVC_EXAMPLE,
            characteristic,
        }
    }

    fn subscribe(characteristic: Uuid, subscribed: bool) -> PeripheralEvent {
        PeripheralEvent::CharacteristicSubscriptionUpdate {
            request: request(characteristic),
            subscribed,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let period = Duration::from_millis(250);
        let start = Instant::now();
        let mut ticker = counter_ticker(period);
        ticker.tick().await;
        assert_eq!(start.elapsed(), period);
    }

    #[test]
    fn tracks_counter_subscription_only() {
        let mut state = ExampleState::new();
        let mut notify = false;

        assert_eq!(handle_gatt_event(&mut state, &mut notify, subscribe(CHR_TOGGLE, true)), None);
        assert!(!notify);

        handle_gatt_event(&mut state, &mut notify, subscribe(CHR_COUNTER, true));
        assert!(notify);

        handle_gatt_event(&mut state, &mut notify, subscribe(CHR_COUNTER, false));
        assert!(!notify);
    }

    #[test]
    fn power_loss_drops_counter_subscription() {
        let mut state = ExampleState::new();
        let mut notify = false;
        handle_gatt_event(&mut state, &mut notify, subscribe(CHR_COUNTER, true));

        let off = PeripheralEvent::StateUpdate { is_powered: false };
        assert_eq!(handle_gatt_event(&mut state, &mut notify, off), Some(false));
        assert!(!notify);

        let mut notify = true;
        let on = PeripheralEvent::StateUpdate { is_powered: true };
        assert_eq!(handle_gatt_event(&mut state, &mut notify, on), Some(true));
        assert!(notify);
    }

    #[test]
    fn read_answers_value() {
        let mut state = ExampleState { counter: 7, ..Default::default() };
        let mut notify = false;
        let (tx, mut rx) = oneshot::channel();
        let ev = PeripheralEvent::ReadRequest {
            request: request(CHR_COUNTER),
            offset: 0,
            responder: tx,
        };
        handle_gatt_event(&mut state, &mut notify, ev);

        let resp = rx.try_recv().unwrap();
        assert!(matches!(resp.response, RequestResponse::Success));
        assert_eq!(resp.value, vec![7, 0, 0, 0]);
    }

    #[test]
    fn read_error_answers_empty_value() {
        let mut state = ExampleState::new();
        let mut notify = false;
        let (tx, mut rx) = oneshot::channel();
        let ev = PeripheralEvent::ReadRequest {
            request: request(CHR_COUNTER),
            offset: 9,
            responder: tx,
        };
        handle_gatt_event(&mut state, &mut notify, ev);

        let resp = rx.try_recv().unwrap();
        assert!(matches!(resp.response, RequestResponse::InvalidOffset));
        assert!(resp.value.is_empty());
    }

    #[test]
    fn write_updates_state_and_answers() {
        let mut state = ExampleState::new();
        let mut notify = false;

        let (tx, mut rx) = oneshot::channel();
        let ev = PeripheralEvent::WriteRequest {
            request: request(CHR_DATA),
            offset: 0,
            value: b"abc".to_vec(),
            responder: tx,
        };
        handle_gatt_event(&mut state, &mut notify, ev);
        assert!(matches!(rx.try_recv().unwrap().response, RequestResponse::Success));
        assert_eq!(state.data, b"abc");

        let (tx, mut rx) = oneshot::channel();
        let ev = PeripheralEvent::WriteRequest {
            request: request(CHR_COUNTER),
            offset: 0,
            value: vec![1],
            responder: tx,
        };
        handle_gatt_event(&mut state, &mut notify, ev);
        assert!(matches!(
            rx.try_recv().unwrap().response,
            RequestResponse::RequestNotSupported
        ));
        assert_eq!(state.counter, 0);
    }
}
