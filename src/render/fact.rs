use maud::{html, Render};

use crate::profile::{Database, Fact, Stat, StackGroup};

impl Render for Stat {
    fn render(&self) -> maud::Markup {
        html! {
            div class=(format!("stat accent-{}", self.accent)) {
                small { (self.label) }
                strong { (self.value) }
            }
        }
    }
}

impl Render for Fact {
    fn render(&self) -> maud::Markup {
        html! {
            div class="fact" {
                small { (self.label) ":" }
                span { (self.value) }
            }
        }
    }
}

impl Render for StackGroup {
    fn render(&self) -> maud::Markup {
        html! {
            div {
                p { b { (self.title) } }
                (self.items)
            }
        }
    }
}

impl Render for Database {
    fn render(&self) -> maud::Markup {
        html! {
            div class="row" {
                span { (self.name) }
                code { (self.kind) }
            }
        }
    }
}
