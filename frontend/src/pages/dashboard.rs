use chrono::Utc;
use shared::dashboard::calendar::first_of_month;
use shared::{Appointment, ClientConfig, Session};
use yew::prelude::*;

use crate::components::loading::LoadingKind;
use crate::components::{AppointmentItem, Avatar, DayPicker, Header, Loading};
use crate::hooks::use_dashboard;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub config: ClientConfig,
    pub session: Session,
    pub on_open_profile: Callback<()>,
    pub on_sign_out: Callback<()>,
}

fn spinner() -> Html {
    html! { <Loading kind={LoadingKind::SpinningBubbles} /> }
}

fn period_section(title: &str, appointments: &[Appointment], loading: bool) -> Html {
    html! {
        <section class="period">
            <h3>{ title }</h3>
            if loading {
                { spinner() }
            } else if appointments.is_empty() {
                <h4>{"Não há agendamentos para o período!"}</h4>
            } else {
                { for appointments.iter().map(|appointment| html! {
                    <AppointmentItem
                        key={appointment.id.clone()}
                        appointment={appointment.clone()}
                    />
                }) }
            }
        </section>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let dashboard = use_dashboard(&props.config, &props.session);
    let view = &dashboard.view;

    let from_month = {
        let offset = props.config.display_offset;
        first_of_month(Utc::now().with_timezone(&offset).date_naive())
    };

    let next_appointment = match (&view.next_appointment, view.is_today) {
        (Some(next), true) => html! {
            <div class="next-appointment">
                <strong>{"Agendamento a seguir"}</strong>
                <div>
                    <Avatar
                        avatar_url={next.provider_user.avatar_url.clone()}
                        name={next.provider_user.name.clone()}
                        size={80}
                    />
                    <strong>{ &next.provider_user.name }</strong>
                    <span>{ &next.hour_formatted }</span>
                </div>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="dashboard">
            <Header
                user={props.session.user.clone()}
                on_open_profile={props.on_open_profile.clone()}
                on_sign_out={props.on_sign_out.clone()}
            />
            <main class="content">
                <div class="schedule">
                    <h1>{"Horários agendados"}</h1>
                    <p>
                        if view.is_today {
                            <span>{"Hoje"}</span>
                        }
                        <span>{ &view.selected_date_as_text }</span>
                        <span>{ &view.selected_week_day_as_text }</span>
                    </p>

                    if view.loading {
                        { spinner() }
                    } else {
                        { next_appointment }
                    }

                    { period_section("Manhã", &view.morning, view.loading) }
                    { period_section("Tarde", &view.afternoon, view.loading) }
                </div>
                <aside class="calendar">
                    <DayPicker
                        selected_date={view.selected_date}
                        current_month={view.current_month}
                        {from_month}
                        disabled_days={view.disabled_days.clone()}
                        on_day_click={dashboard.actions.select_date.clone()}
                        on_month_change={dashboard.actions.change_month.clone()}
                    />
                </aside>
            </main>
        </div>
    }
}
