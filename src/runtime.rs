use std::sync::Arc;

use crate::events::queue::TriggerBus;
use crate::events::worker::run_trigger_worker;
use crate::handlers::push::notification_route;
use crate::service::calendar_service::{CalendarApi, CalendarService};

const TRIGGER_BUFFER: usize = 32;

pub async fn run_api(api_token: String, default_calendar: String, port: u16) {
    let api: Arc<dyn CalendarApi> = Arc::new(CalendarService::new(api_token));

    let (bus, rx) = TriggerBus::new(TRIGGER_BUFFER);
    tokio::spawn({
        let api = api.clone();
        async move {
            run_trigger_worker(rx, api).await;
        }
    });

    let routes = notification_route(bus, default_calendar);
    log::info!("Listening for push notifications on port {}", port);
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;
}
