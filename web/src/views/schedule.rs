//! Event timeline. Static content; the backend is not involved.

use dioxus::prelude::*;
use ui::icons::FaCalendarDays;
use ui::Icon;

const SCHEDULE: &[(&str, &[&str])] = &[
    ("After Breakfast", &["Treasure Hunt"]),
    (
        "After Lunch",
        &[
            "Dance Programmes",
            "Drama",
            "Stand Up",
            "Branch Wise Photograph",
            "Spotlight Events",
            "Mr and Ms Freshie",
            "Return Gift Distribution",
        ],
    ),
    ("After Dinner", &["Rhapsody Concert", "DJ Night"]),
];

#[component]
pub fn Schedule() -> Element {
    rsx! {
        div {
            class: "schedule-screen",
            div {
                class: "screen-header",
                Icon { icon: FaCalendarDays, width: 32, height: 32 }
                h1 { "The night, hour by hour" }
                p { "Timings are approximate; follow the announcements on the day." }
            }

            div {
                class: "timeline",
                for (slot, events) in SCHEDULE.iter().copied() {
                    section {
                        key: "{slot}",
                        class: "timeline-slot",
                        h2 { class: "timeline-heading", "{slot}" }
                        ul {
                            class: "timeline-events",
                            for event in events.iter() {
                                li { key: "{event}", class: "card timeline-event", "{event}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
