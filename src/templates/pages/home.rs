// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Resident Registry",
        html! {
            main class="container" {
                h1 { "Resident Registry" }

                div class="card" {
                    h2 { "Residents for Review" }
                    p style="color: #6b7280;" {
                        "Residents with pending or denied verification, or flagged for review."
                    }
                    a href="/admin/review" { "Open review queue" }
                }
            }
        },
    )
}
