use maud::{html, Markup};

/// Summary card: a big number with a caption.
pub fn count_card(title: &str, count: usize) -> Markup {
    html! {
        div class="card" {
            div class="count" { (count) }
            div style="color: #6b7280; font-size: 0.9em;" { (title) }
        }
    }
}
