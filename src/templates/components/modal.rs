use maud::{html, Markup};

/// Modal chrome; `close_action` is the POST target of the close button.
pub fn modal(id: &str, title: &str, close_action: &str, body: Markup) -> Markup {
    html! {
        div class="modal-backdrop" id=(id) {
            div class="modal" role="dialog" aria-modal="true" {
                div style="display: flex; justify-content: space-between; align-items: center;" {
                    h3 style="margin: 0;" { (title) }
                    form action=(close_action) method="post" style="margin: 0;" {
                        button type="submit" aria-label="Close" style="background: none; border: none; font-size: 1.25rem; cursor: pointer;" { "×" }
                    }
                }
                (body)
            }
        }
    }
}
