use crate::{
    profile,
    render::BENTO_ANCHOR,
    req::ParsedRequest,
    ui::{ActiveTab, ThemeMode},
};
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub mod home;

/// A basic header with a dynamic `page_title`.
pub fn header(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="description" content="Kedarnath Tattapure, MCA final year student and software developer from Pune: projects, skills and contacts.";
            link rel="preload" href="/css/site.css" as="style";
            link rel="stylesheet" href="/css/site.css";
            title { (title) }
        }
    }
}

fn nav_header(parsed: &ParsedRequest) -> Markup {
    let view = parsed.view;
    let (toggle_icon, toggle_class) = match view.theme {
        ThemeMode::Dark => ("☀", "toggle to-light"),
        ThemeMode::Light => ("☾", "toggle to-dark"),
    };

    html! {
        nav class="floating" {
            ul {
                li { a href=(format!("{}#home", view.href())) { "Home" } }
                li { a href=(format!("{}#{BENTO_ANCHOR}", view.with_tab(ActiveTab::About).href())) { "About me" } }
                li { a href=(format!("{}#{BENTO_ANCHOR}", view.with_tab(ActiveTab::Projects).href())) { "Projects" } }
                li { a href="#contact-me" { "Contact" } }
            }
            @if !parsed.response_type.is_text() {
                a class=(toggle_class) href=(view.with_theme_toggled().href()) aria-label="Toggle theme" { (toggle_icon) }
            }
        }
    }
}

pub fn html_page(title: &str, content: Markup, parsed: &ParsedRequest) -> Markup {
    html! {
        (DOCTYPE)
        html lang = "en" {
            (header(title))
            body class=(parsed.view.theme.body_class()) {
                (nav_header(parsed))
                (content)
                (footer())
            }
        }
    }
}

/// A static footer.
pub fn footer() -> Markup {
    let year = Utc::now().year();
    html! {
        footer {
            p { "© " (year) " " (profile::NAME) }
            span { (profile::SHORT_LOCATION) }
        }
    }
}
