//! Synthetic clicks for trying out the dashboard.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::models::ClickEvent;

pub const NUM_EVENTS_TO_GENERATE: usize = 100;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub struct PageEvents {
    pub name: &'static str,
    pub events: &'static [&'static str],
}

// An idea of the kind of events tracked, by no means exhaustive.
pub const PAGE_EVENTS: &[PageEvents] = &[
    PageEvents {
        name: "home_page",
        events: &["learn_more_link", "sign_up_button", "contact_link"],
    },
    PageEvents {
        name: "sign_up_page",
        events: &["form_submit_button", "cancel_button", "home_link"],
    },
    PageEvents {
        name: "contact_page",
        events: &[
            "form_submit_button",
            "cancel_button",
            "open_chat_button",
            "copy_phone_number_button",
        ],
    },
    PageEvents {
        name: "faq_page",
        events: &[
            "expand_q1_arrow_button",
            "expand_q2_arrow_button",
            "contact_button",
        ],
    },
];

/// `events_per_kind` clicks for every page/event pair, each at a random whole
/// second in the day before `now`.
pub fn generate_events<R: Rng>(
    now: DateTime<Utc>,
    events_per_kind: usize,
    rng: &mut R,
) -> Vec<ClickEvent> {
    let now = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
    let mut clicks = Vec::new();

    for page in PAGE_EVENTS {
        for event in page.events {
            for _ in 0..events_per_kind {
                let seconds_ago = rng.random_range(1..=SECONDS_PER_DAY);
                clicks.push(ClickEvent {
                    time: now - TimeDelta::seconds(seconds_ago),
                    page: page.name.to_owned(),
                    event: (*event).to_owned(),
                });
            }
        }
    }

    clicks
}
