use crate::residents::StatusBadge;
use maud::{html, Markup};

pub fn status_badge(badge: &StatusBadge) -> Markup {
    html! {
        span class=(badge.css_class()) { (badge.label) }
    }
}
