use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use shared::dashboard::{DashboardController, DashboardView, DayRequest, LoadOutcome, MonthRequest};
use shared::{ClientConfig, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseDashboardResult {
    pub view: Rc<DashboardView>,
    pub actions: UseDashboardActions,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub select_date: Callback<NaiveDate>,
    pub change_month: Callback<NaiveDate>,
}

type Controller = Rc<DashboardController<ApiClient>>;

fn spawn_month_load(controller: Controller, request: MonthRequest, rerender: UseForceUpdateHandle) {
    spawn_local(async move {
        match controller.load_month(request).await {
            LoadOutcome::Applied => rerender.force_update(),
            LoadOutcome::Failed => {
                gloo::console::error!("Failed to fetch month availability");
                rerender.force_update();
            }
            LoadOutcome::Stale => {}
        }
    });
}

fn spawn_day_load(controller: Controller, request: DayRequest, rerender: UseForceUpdateHandle) {
    spawn_local(async move {
        match controller.load_day(request).await {
            LoadOutcome::Applied => rerender.force_update(),
            LoadOutcome::Failed => {
                gloo::console::error!("Failed to fetch appointments for", request.date.to_string());
                rerender.force_update();
            }
            LoadOutcome::Stale => {}
        }
    });
}

#[hook]
pub fn use_dashboard(config: &ClientConfig, session: &Session) -> UseDashboardResult {
    let controller = {
        let config = config.clone();
        use_memo(session.clone(), move |session| {
            let today = Utc::now().with_timezone(&config.display_offset).date_naive();
            let client = ApiClient::new(config, session.clone());
            DashboardController::new(client, session.provider_id(), today)
        })
    };
    let rerender = use_force_update();

    // Initial loads run as separate tasks so neither waits on the other;
    // the controller is rebuilt (and reloaded) when the session changes
    {
        let controller = controller.clone();
        let rerender = rerender.clone();
        use_effect_with(session.clone(), move |_| {
            let (month, day) = {
                let store = controller.store();
                (store.pending_month_request(), store.pending_day_request())
            };
            if let Some(request) = month {
                spawn_month_load(controller.clone(), request, rerender.clone());
            }
            if let Some(request) = day {
                spawn_day_load(controller, request, rerender);
            }
            || ()
        });
    }

    let select_date = {
        let controller = controller.clone();
        let rerender = rerender.clone();
        Callback::from(move |date: NaiveDate| {
            let Some(request) = controller.select_date(date) else {
                return;
            };
            rerender.force_update();
            spawn_day_load(controller.clone(), request, rerender.clone());
        })
    };

    let change_month = {
        let controller = controller.clone();
        let rerender = rerender.clone();
        Callback::from(move |month: NaiveDate| {
            let request = controller.change_month(month);
            rerender.force_update();
            spawn_month_load(controller.clone(), request, rerender.clone());
        })
    };

    // Derived values only change when the store does; "now" is sampled at that point
    let snapshot = controller.store().clone();
    let offset = config.display_offset;
    let view = use_memo(snapshot, move |store| store.view(&Utc::now().with_timezone(&offset)));

    UseDashboardResult {
        view,
        actions: UseDashboardActions {
            select_date,
            change_month,
        },
    }
}
