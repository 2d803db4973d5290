use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::BookingData;

#[component]
pub fn Booking(data: BookingData) -> Element {
    rsx! {
        div {
            class: "booking-block",
            h3 { {text_or_hint(&data.title, "Booking")} }
            if data.calendar_url.is_empty() {
                p { class: "placeholder", "No calendar linked" }
            } else {
                p { class: "placeholder", "Embedded calendar: {data.calendar_url}" }
            }
        }
    }
}
