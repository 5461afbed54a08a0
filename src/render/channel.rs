use maud::{html, Render};

use crate::profile::{Channel, Social};

use super::is_external;

impl Render for Channel {
    fn render(&self) -> maud::Markup {
        let body = html! {
            span class=(format!("badge accent-{}", self.accent)) {}
            div {
                small { (self.label) }
                p { b { (self.value) } }
            }
        };
        html! {
            @match self.href {
                Some(href) if is_external(href) => {
                    a class="channel" href=(href) target="_blank" rel="noopener noreferrer" { (body) }
                }
                Some(href) => {
                    a class="channel" href=(href) { (body) }
                }
                None => {
                    div class="channel" { (body) }
                }
            }
        }
    }
}

impl Render for Social {
    fn render(&self) -> maud::Markup {
        html! {
            @if is_external(self.href) {
                a class="social" href=(self.href) target="_blank" rel="noopener noreferrer"
                    style=(format!("--hover: {}", self.color)) { (self.label) }
            } @else {
                a class="social" href=(self.href) style=(format!("--hover: {}", self.color)) { (self.label) }
            }
        }
    }
}
