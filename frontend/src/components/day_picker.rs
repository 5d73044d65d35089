use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use shared::dashboard::calendar::{first_of_month, is_day_disabled, month_grid, shift_month};
use shared::dashboard::locale::{month_title, WEEKDAYS_SHORT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayPickerProps {
    pub selected_date: NaiveDate,
    pub current_month: NaiveDate,
    /// Earliest month the user may navigate to
    pub from_month: NaiveDate,
    pub disabled_days: HashSet<NaiveDate>,
    pub on_day_click: Callback<NaiveDate>,
    pub on_month_change: Callback<NaiveDate>,
}

#[function_component(DayPicker)]
pub fn day_picker(props: &DayPickerProps) -> Html {
    let month = first_of_month(props.current_month);
    let can_go_back = month > first_of_month(props.from_month);

    let on_previous = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |_: MouseEvent| on_month_change.emit(shift_month(month, -1)))
    };
    let on_next = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |_: MouseEvent| on_month_change.emit(shift_month(month, 1)))
    };

    let cells = month_grid(month).into_iter().map(|cell| {
        let Some(date) = cell else {
            return html! { <div class="day-picker-day empty"></div> };
        };

        let disabled = is_day_disabled(date, &props.disabled_days);
        let class = classes!(
            "day-picker-day",
            disabled.then_some("disabled"),
            (date == props.selected_date).then_some("selected"),
            (!disabled).then_some("available"),
        );
        let onclick = {
            let on_day_click = props.on_day_click.clone();
            Callback::from(move |_: MouseEvent| {
                if !disabled {
                    on_day_click.emit(date);
                }
            })
        };

        html! {
            <div {class} {onclick} aria-disabled={disabled.to_string()}>
                { date.day() }
            </div>
        }
    });

    html! {
        <div class="day-picker">
            <div class="day-picker-nav">
                <button class="nav-button" disabled={!can_go_back} onclick={on_previous}>
                    {"‹"}
                </button>
                <span class="day-picker-caption">
                    { format!("{} {}", month_title(month.month()), month.year()) }
                </span>
                <button class="nav-button" onclick={on_next}>{"›"}</button>
            </div>
            <div class="day-picker-weekdays">
                { for WEEKDAYS_SHORT.iter().map(|name| html! {
                    <div class="day-picker-weekday">{ *name }</div>
                }) }
            </div>
            <div class="day-picker-grid">
                { for cells }
            </div>
        </div>
    }
}
