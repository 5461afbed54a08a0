use super::html_page;
use crate::{
    profile::{self, CHANNELS, SOCIALS, STATS},
    render::{TabBar, TabPanel, BENTO_ANCHOR},
    req::{ParsedRequest, PROFILE_IMAGE_PATH, RESUME_PATH},
    state::Submission,
    ui::{ActiveTab, FormStatus, ViewState},
};
use maud::{html, Markup};

pub fn page(parsed: &ParsedRequest, submission: &Submission) -> Markup {
    let text = parsed.response_type.is_text();

    let content = html! {
        (hero())
        (bento(parsed.view, text))
        section id="contact-me" {
            div class="contact" {
                div {
                    span class="badge" { "Let's Talk" }
                    h2 {
                        "Have a project in mind?" br;
                        span class="accent" { "Start a conversation." }
                    }
                    div class="channels" {
                        @for channel in &CHANNELS {
                            (channel)
                        }
                    }
                }
                @if !text {
                    (contact_form(parsed.view, submission))
                }
            }
        }
    };

    html_page(&format!("{} | {}", profile::NAME, profile::ROLE), content, parsed)
}

fn hero() -> Markup {
    html! {
        header id="home" class="hero" {
            div class="intro" {
                div {
                    span class="badge" { (profile::AVAILABILITY) }
                    h1 {
                        (profile::FIRST_NAME) br;
                        span class="fade" { (profile::LAST_NAME) }
                    }
                    p {
                        span class="accent upper" { (profile::STUDIES) } br;
                        "Specializing in " b { (profile::SPECIALIZATION) } "."
                    }
                }
                div class="ring" aria-hidden="true" {
                    svg viewBox="0 0 100 100" {
                        path id="ring-path" d="M 50, 50 m -37, 0 a 37,37 0 1,1 74,0 a 37,37 0 1,1 -74,0" fill="none" {}
                        text {
                            textPath href="#ring-path" { (profile::ROLE) " • " (profile::ROLE) " • " }
                        }
                    }
                }
            }
            div class="stats" {
                a class="cv" href=(format!("/{RESUME_PATH}")) download { "Download CV" }
                @for stat in &STATS {
                    (stat)
                }
            }
        }
    }
}

fn bento(view: ViewState, text: bool) -> Markup {
    html! {
        main id=(BENTO_ANCHOR) class="bento" {
            div class="tile photo" {
                img src=(format!("/images/{PROFILE_IMAGE_PATH}")) alt=(format!("{} Profile", profile::NAME));
            }
            div class="tile summary" {
                h3 { "Professional Summary" }
                p { em { (profile::SUMMARY) } }
            }
            div class="tile counter" {
                strong { (profile::DSA_SOLVED) }
                small { "DSA Solved" }
            }
            div class="tile tabbed" {
                @if text {
                    @for tab in ActiveTab::ALL {
                        h3 { (tab.as_str()) }
                        (TabPanel(tab))
                    }
                } @else {
                    (TabBar(view))
                    (TabPanel(view.tab))
                }
            }
            div class="tile socials" {
                @for social in &SOCIALS {
                    (social)
                }
            }
            div class="tile ship" {
                span class="globe" aria-hidden="true" { "◍" }
                small { "Ship Ready" }
            }
        }
    }
}

fn contact_form(view: ViewState, submission: &Submission) -> Markup {
    let status = submission.status;
    let draft = submission.draft.as_ref();
    let name = draft.map(|m| m.name.as_str());
    let email = draft.map(|m| m.email.as_str());

    html! {
        form class="contact-form" action="/contact" method="post" {
            input type="hidden" name="theme" value=(view.theme.as_str());
            input type="hidden" name="tab" value=(view.tab.as_str());
            div class="columns" {
                div {
                    label for="user_name" { "Name" }
                    input id="user_name" required name="name" type="text" placeholder="John Doe"
                        value=[name];
                }
                div {
                    label for="user_email" { "Email" }
                    input id="user_email" required name="email" type="email" placeholder="john@example.com"
                        value=[email];
                }
            }
            div {
                label for="user_message" { "Message" }
                textarea id="user_message" required name="message" rows="4"
                    placeholder="Hello Kedarnath, I'm interested in..." {
                    @if let Some(draft) = draft {
                        (draft.message)
                    }
                }
            }
            button type="submit" class=(format!("status-{status:?}").to_lowercase())
                disabled[status == FormStatus::Sending] role="status" {
                (status.button_label())
            }
        }
    }
}
