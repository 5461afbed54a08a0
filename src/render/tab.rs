use maud::{html, Render};

use crate::{
    profile::{DATABASES, FACTS, PROJECTS, STACK},
    ui::{ActiveTab, ViewState},
};

/// Id of the bento grid, tab links scroll back to it.
pub const BENTO_ANCHOR: &str = "bento";

/// One link per tab, only the one of the current view is marked active.
pub struct TabBar(pub ViewState);

impl Render for TabBar {
    fn render(&self) -> maud::Markup {
        let view = self.0;
        html! {
            nav class="tabs" {
                @for tab in ActiveTab::ALL {
                    @let active = tab == view.tab;
                    a.tab.active[active]
                        href=(format!("{}#{BENTO_ANCHOR}", view.with_tab(tab).href()))
                        aria-current=[active.then_some("page")] { (tab.as_str()) }
                }
            }
        }
    }
}

/// The static content block selected by a tab.
pub struct TabPanel(pub ActiveTab);

impl Render for TabPanel {
    fn render(&self) -> maud::Markup {
        html! {
            div class=(format!("panel panel-{}", self.0)) data-tab=(self.0.as_str()) {
                @match self.0 {
                    ActiveTab::Projects => {
                        @for project in &PROJECTS {
                            (project)
                        }
                    }
                    ActiveTab::Stack => {
                        div class="columns" {
                            @for group in &STACK {
                                (group)
                            }
                        }
                    }
                    ActiveTab::Databases => {
                        @for db in &DATABASES {
                            (db)
                        }
                    }
                    ActiveTab::About => {
                        div class="columns" {
                            @for fact in &FACTS {
                                (fact)
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ui::ThemeMode;

    #[test]
    fn one_active_tab() {
        for tab in ActiveTab::ALL {
            let view = ViewState {
                theme: ThemeMode::Light,
                tab,
            };
            let html = TabBar(view).render().into_string();
            assert_eq!(html.matches("tab active").count(), 1, "{html}");
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
            assert!(html.contains(&format!("href=\"/?theme=light&amp;tab={tab}#bento\"")));
        }
    }

    #[test]
    fn panel_content() {
        let projects = TabPanel(ActiveTab::Projects).render().into_string();
        assert!(projects.contains("Data Automation Script"));
        assert!(projects.contains("Live Demo"));

        let databases = TabPanel(ActiveTab::Databases).render().into_string();
        assert!(databases.contains("MongoDB"));
        assert!(!databases.contains("Data Automation Script"));

        let about = TabPanel(ActiveTab::About).render().into_string();
        assert!(about.contains("kedart445@gmail.com"));
    }
}
