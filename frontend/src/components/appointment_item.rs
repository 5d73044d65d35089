use shared::Appointment;
use yew::prelude::*;

use super::avatar::Avatar;

#[derive(Properties, PartialEq)]
pub struct AppointmentItemProps {
    pub appointment: Appointment,
}

#[function_component(AppointmentItem)]
pub fn appointment_item(props: &AppointmentItemProps) -> Html {
    let appointment = &props.appointment;

    html! {
        <div class="appointment">
            <span class="appointment-hour">{ &appointment.hour_formatted }</span>
            <div class="appointment-user">
                <Avatar
                    avatar_url={appointment.provider_user.avatar_url.clone()}
                    name={appointment.provider_user.name.clone()}
                />
                <strong>{ &appointment.provider_user.name }</strong>
            </div>
        </div>
    }
}
