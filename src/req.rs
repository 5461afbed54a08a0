use crate::{error::Error, route::ResponseType, state::SubmissionId, ui::ViewState};
use hyper::{http::request::Parts, Method};

pub const RESUME_PATH: &str = "Kedarnath_Tattapure_Resume.pdf";
pub const PROFILE_IMAGE_PATH: &str = "profile.png";

#[derive(Debug, Clone)]
pub struct ParsedRequest {
    pub resource: Resource,
    pub response_type: ResponseType,
    pub view: ViewState,
    pub submission: Option<SubmissionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Home,
    Contact,
    Css,
    Robots,
    Resume,
    ProfileImage,
    Metrics,
}

impl Resource {
    /// Label used in metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Home => "home",
            Resource::Contact => "contact",
            Resource::Css => "css",
            Resource::Robots => "robots",
            Resource::Resume => "resume",
            Resource::ProfileImage => "profile_image",
            Resource::Metrics => "metrics",
        }
    }
}

pub fn parse(parts: &Parts) -> Result<ParsedRequest, Error> {
    let mut path = parts.uri.path().split('/').skip(1);
    // HEAD resolves like GET, the body is dropped when responding
    let method = if parts.method == Method::HEAD {
        &Method::GET
    } else {
        &parts.method
    };

    let mut response_type = ResponseType::Html;
    let resource = match (method, path.next(), path.next(), path.next()) {
        (&Method::GET, Some(""), None, None) => Resource::Home,
        (&Method::GET, Some("text"), None, None) => {
            response_type = ResponseType::Text(80);
            Resource::Home
        }
        (&Method::POST, Some("contact"), None, None) => Resource::Contact,
        (&Method::GET, Some("css"), Some("site.css"), None) => Resource::Css,
        (&Method::GET, Some("robots.txt"), None, None) => Resource::Robots,
        (&Method::GET, Some(RESUME_PATH), None, None) => Resource::Resume,
        (&Method::GET, Some("images"), Some(PROFILE_IMAGE_PATH), None) => Resource::ProfileImage,
        (&Method::GET, Some("metrics"), None, None) => Resource::Metrics,
        _ => return Err(Error::NotFound),
    };

    let mut view = ViewState::default();
    let mut submission = None;
    if let Some(query) = parts.uri.query() {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == "submission" {
                submission = Some(value.parse()?);
            } else if !view.apply(&key, &value)? {
                log::trace!("ignoring query parameter {key}");
            }
        }
    }

    Ok(ParsedRequest {
        resource,
        response_type,
        view,
        submission,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ui::{ActiveTab, ThemeMode};
    use hyper::Request;

    fn parts(method: Method, uri: &str) -> Parts {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn parse_home_query() {
        let parsed = parse(&parts(
            Method::GET,
            "/?theme=light&tab=databases&submission=3&utm_source=x",
        ))
        .unwrap();
        assert_eq!(parsed.resource, Resource::Home);
        assert_eq!(parsed.view.theme, ThemeMode::Light);
        assert_eq!(parsed.view.tab, ActiveTab::Databases);
        assert_eq!(parsed.submission, Some(SubmissionId(3)));
        assert!(!parsed.response_type.is_text());
    }

    #[test]
    fn parse_defaults() {
        let parsed = parse(&parts(Method::GET, "/")).unwrap();
        assert_eq!(parsed.view, ViewState::default());
        assert_eq!(parsed.submission, None);
    }

    #[test]
    fn parse_routes() {
        let cases = [
            (Method::GET, "/text", Resource::Home),
            (Method::POST, "/contact", Resource::Contact),
            (Method::GET, "/css/site.css", Resource::Css),
            (Method::GET, "/robots.txt", Resource::Robots),
            (Method::GET, "/Kedarnath_Tattapure_Resume.pdf", Resource::Resume),
            (Method::GET, "/images/profile.png", Resource::ProfileImage),
            (Method::GET, "/metrics", Resource::Metrics),
            (Method::HEAD, "/", Resource::Home),
            (Method::HEAD, "/images/profile.png", Resource::ProfileImage),
        ];
        for (method, uri, expected) in cases {
            assert_eq!(parse(&parts(method, uri)).unwrap().resource, expected, "{uri}");
        }
        assert!(parse(&parts(Method::GET, "/text"))
            .unwrap()
            .response_type
            .is_text());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse(&parts(Method::GET, "/contact")),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            parse(&parts(Method::POST, "/")),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            parse(&parts(Method::HEAD, "/contact")),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            parse(&parts(Method::GET, "/?tab=blog")),
            Err(Error::InvalidQuery("tab", _))
        ));
        assert!(matches!(
            parse(&parts(Method::GET, "/?submission=abc")),
            Err(Error::InvalidQuery("submission", _))
        ));
    }
}
