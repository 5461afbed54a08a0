use maud::{html, Render};

use crate::profile::{Link, Project};

use super::is_external;

impl Render for Link {
    fn render(&self) -> maud::Markup {
        html! {
            @if is_external(self.href) {
                a.pill.primary[self.primary] href=(self.href) target="_blank" rel="noopener noreferrer" { (self.label) }
            } @else {
                a.pill.primary[self.primary] href=(self.href) { (self.label) }
            }
        }
    }
}

impl Render for Project {
    fn render(&self) -> maud::Markup {
        html! {
            article class="card" {
                header {
                    h4 { (self.title) }
                    span class=(format!("tag accent-{}", self.accent)) { (self.tag) }
                }
                p { (self.summary) }
                div class="links" {
                    @for link in self.links {
                        (link)
                    }
                }
            }
        }
    }
}
