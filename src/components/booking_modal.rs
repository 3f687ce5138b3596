use web_sys::{MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::content;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub on_close: Callback<MouseEvent>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    // The form has no submission target; swallowing the event keeps the
    // browser from performing a native submit and reloading the page.
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="modal-layer">
            <div class="modal-backdrop" onclick={props.on_close.clone()}></div>
            <div class="modal-dialog">
                <button class="modal-close" onclick={props.on_close.clone()} aria-label="Close">
                    <SvgIcon icon={Icon::Close} size={20} />
                </button>
                <h3>{"Let's Talk"}</h3>
                <p class="modal-lead">
                    {"Fill out this quick form and a care coordinator will reach out within 2 hours."}
                </p>
                <form class="booking-form" onsubmit={onsubmit}>
                    <input type="text" placeholder="Your Name" />
                    <input type="email" placeholder="Email Address" />
                    <select>
                        { for content::CONSULTATION_TOPICS.iter().map(|topic| html! {
                            <option>{ *topic }</option>
                        }) }
                    </select>
                    <button type="submit" class="booking-submit">{"Request Consultation"}</button>
                </form>
            </div>
        </div>
    }
}
