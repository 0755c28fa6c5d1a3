use crate::review::{Flash, FlashKind};
use maud::{html, Markup};

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="banner banner-error" role="alert" { (message) }
    }
}

pub fn flash_banners(flashes: &[Flash]) -> Markup {
    html! {
        @for flash in flashes {
            @match flash.kind {
                FlashKind::Success => {
                    div class="banner banner-success" role="status" { (flash.message) }
                }
                FlashKind::Failure => {
                    div class="banner banner-error" role="alert" { (flash.message) }
                }
            }
        }
    }
}
