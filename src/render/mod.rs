mod channel;
mod fact;
mod project;
mod tab;

pub use tab::{TabBar, TabPanel, BENTO_ANCHOR};

/// `true` for links leaving the site, they open in a new tab.
fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
