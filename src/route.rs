use crate::{
    contact::{ContactForm, MAX_FORM_BYTES},
    error::Error,
    pages,
    req::{self, ParsedRequest, Resource, PROFILE_IMAGE_PATH, RESUME_PATH},
    state::Submission,
    ui::FormStatus,
    SharedState, HTTP_COUNTER,
};
use html2text::render::text_renderer::RichDecorator;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::{
    body::{Body, Bytes},
    header::{
        CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED,
        LOCATION,
    },
    http::{request::Parts, response::Builder},
    Method, Request, Response, StatusCode,
};
use mime::{
    APPLICATION_PDF, APPLICATION_WWW_FORM_URLENCODED, IMAGE_PNG, TEXT_HTML_UTF_8, TEXT_PLAIN_UTF_8,
};
use prometheus::{Encoder, TextEncoder};
use std::{
    convert::Infallible,
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

const CSS_LAST_MODIFIED: &str = "Sat, 17 Oct 2026 07:53:03 GMT";
const ROBOTS_LAST_MODIFIED: &str = "Sat, 17 Oct 2026 07:53:03 GMT";
const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";
const REFRESH: &str = "refresh";

/// Anchor of the contact section, redirects after a post land there.
const CONTACT_ANCHOR: &str = "#contact-me";

#[derive(Debug, Clone, Copy)]
pub enum ResponseType {
    Text(usize),
    Html,
}

impl ResponseType {
    pub fn is_text(&self) -> bool {
        matches!(self, ResponseType::Text(_))
    }
}

pub async fn route<B>(
    req: Request<B>,
    state: Arc<SharedState>,
) -> Result<Response<Full<Bytes>>, Error>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let now = Instant::now();
    let (parts, body) = req.into_parts();
    let parsed_req = req::parse(&parts)?;
    HTTP_COUNTER
        .with_label_values(&[parsed_req.resource.label()])
        .inc();

    // DETERMINE IF NOT MODIFIED
    if let Some(if_modified_since) = parts.headers.get(IF_MODIFIED_SINCE) {
        log::trace!("{:?} if modified since {:?}", parts.uri, if_modified_since);
        let modified = match parsed_req.resource {
            Resource::Css => Some(CSS_LAST_MODIFIED),
            Resource::Robots => Some(ROBOTS_LAST_MODIFIED),
            _ => None,
        };
        if let Some(modified) = modified {
            if *if_modified_since == modified {
                log::debug!("{:?} Not modified", parts.uri);

                return Ok(Response::builder()
                    .status(StatusCode::NOT_MODIFIED)
                    .body(Full::default())?);
            }
        }
    }

    let resp = match parsed_req.resource {
        Resource::Home => home(&parsed_req, &state).await?,

        Resource::Contact => {
            check_form_content_type(&parts)?;
            let body = read_body(body).await?;
            let form = ContactForm::parse(&body)?;
            let id = state.submissions.begin(form.message.clone()).await;

            let relay_state = state.clone();
            let message = form.message;
            tokio::spawn(async move {
                let outcome = relay_state.relay.deliver(&message).await;
                relay_state.submissions.finish(id, outcome).await;
            });

            Response::builder()
                .status(StatusCode::SEE_OTHER)
                .header(
                    LOCATION,
                    format!("{}{CONTACT_ANCHOR}", form.view.href_with_submission(id)),
                )
                .body(Full::default())?
        }

        Resource::Css => Response::builder()
            .header(LAST_MODIFIED, CSS_LAST_MODIFIED)
            .header(CACHE_CONTROL, "public, max-age=31536000")
            .header(CONTENT_TYPE, "text/css; charset=utf-8")
            .body(Full::new(Bytes::from_static(
                include_str!("css/site.css").as_bytes(),
            )))?,

        Resource::Robots => Response::builder()
            .header(LAST_MODIFIED, ROBOTS_LAST_MODIFIED)
            .header(CACHE_CONTROL, "public, max-age=3600")
            .header(CONTENT_TYPE, "text/plain")
            .body(Full::new(Bytes::from_static(include_bytes!("robots.txt"))))?,

        Resource::Resume => Response::builder()
            .header(CACHE_CONTROL, ASSET_CACHE_CONTROL)
            .header(CONTENT_TYPE, APPLICATION_PDF.as_ref())
            .header(
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_PATH}\""),
            )
            .body(read_asset(&state.args.assets_dir, RESUME_PATH).await?)?,

        Resource::ProfileImage => Response::builder()
            .header(CACHE_CONTROL, ASSET_CACHE_CONTROL)
            .header(CONTENT_TYPE, IMAGE_PNG.as_ref())
            .body(
                read_asset(
                    &state.args.assets_dir,
                    Path::new("images").join(PROFILE_IMAGE_PATH),
                )
                .await?,
            )?,

        Resource::Metrics => {
            let encoder = TextEncoder::new();
            let mut buffer = Vec::new();
            encoder.encode(&prometheus::gather(), &mut buffer)?;
            Response::builder()
                .header(CONTENT_TYPE, encoder.format_type())
                .header(CACHE_CONTROL, "no-store")
                .body(Full::new(Bytes::from(buffer)))?
        }
    };

    log::debug!("{:?} executed in {:?}", parts.uri, now.elapsed());

    if parts.method == Method::HEAD {
        let (head, _) = resp.into_parts();
        return Ok(Response::from_parts(head, Full::default()));
    }
    Ok(resp)
}

async fn home(
    parsed_req: &ParsedRequest,
    state: &SharedState,
) -> Result<Response<Full<Bytes>>, Error> {
    let submission = match parsed_req.submission {
        Some(id) => state.submissions.get(id).await,
        None => Submission::default(),
    };
    let page = pages::home::page(parsed_req, &submission).into_string();

    let mut builder = Response::builder();
    builder = match parsed_req.submission {
        Some(_) => builder.header(CACHE_CONTROL, "no-store"),
        None => builder.header(CACHE_CONTROL, "public, max-age=300"),
    };
    if !parsed_req.response_type.is_text() {
        builder = with_refresh(builder, parsed_req, &submission, state);
    }

    Ok(match parsed_req.response_type {
        ResponseType::Text(col) => builder
            .header(CONTENT_TYPE, TEXT_PLAIN_UTF_8.as_ref())
            .body(convert_text_html(&page, col))?,
        ResponseType::Html => builder
            .header(CONTENT_TYPE, TEXT_HTML_UTF_8.as_ref())
            .body(Full::new(Bytes::from(page)))?,
    })
}

/// While a submission is in flight the page polls, once settled it goes back to the idle form
/// after the status reset delay. A failed submission returns to a form filled with its draft.
fn with_refresh(
    builder: Builder,
    parsed_req: &ParsedRequest,
    submission: &Submission,
    state: &SharedState,
) -> Builder {
    match submission.status {
        FormStatus::Sending => builder.header(REFRESH, "1"),
        status if status.is_settled() => {
            let secs = refresh_secs(state.submissions.reset_after());
            let url = match parsed_req.submission {
                Some(id) if submission.draft.is_some() => {
                    parsed_req.view.href_with_submission(id)
                }
                _ => parsed_req.view.href(),
            };
            builder.header(REFRESH, format!("{secs}; url={url}{CONTACT_ANCHOR}"))
        }
        _ => builder,
    }
}

/// `Refresh` takes whole seconds, never fire before the registry reset.
fn refresh_secs(reset_after: Duration) -> u128 {
    reset_after.as_millis().div_ceil(1000).max(1)
}

fn check_form_content_type(parts: &Parts) -> Result<(), Error> {
    match parts.headers.get(CONTENT_TYPE) {
        None => Ok(()),
        Some(value) => {
            let value = value.to_str().map_err(|_| Error::BadRequest)?;
            if value.starts_with(APPLICATION_WWW_FORM_URLENCODED.essence_str()) {
                Ok(())
            } else {
                Err(Error::ContentTypeUnsupported(value.to_string()))
            }
        }
    }
}

async fn read_body<B>(body: B) -> Result<Bytes, Error>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match Limited::new(body, MAX_FORM_BYTES).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(Error::PayloadTooLarge(MAX_FORM_BYTES)),
        Err(e) => Err(Error::Body(e.to_string())),
    }
}

async fn read_asset(dir: &Path, path: impl AsRef<Path>) -> Result<Full<Bytes>, Error> {
    let full = dir.join(path);
    match tokio::fs::read(&full).await {
        Ok(bytes) => Ok(Full::new(Bytes::from(bytes))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("missing asset {}", full.display());
            Err(Error::NotFound)
        }
        Err(e) => Err(e.into()),
    }
}

fn convert_text_html(page: &str, columns: usize) -> Full<Bytes> {
    Full::new(Bytes::from(convert_text_html_string(page, columns)))
}

fn convert_text_html_string(page: &str, columns: usize) -> String {
    html2text::from_read_with_decorator(page.as_bytes(), columns, RichDecorator {})
}

pub async fn route_infallible<B>(
    req: Request<B>,
    state: Arc<SharedState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let resp = route(req, state).await.unwrap_or_else(|e| {
        let body = format!("{}", e);
        let status = StatusCode::from(e);
        if status.is_server_error() {
            log::error!("{body}");
        } else {
            log::debug!("{status} {body}");
        }
        let mut resp = Response::new(Full::new(Bytes::from(body)));
        *resp.status_mut() = status;
        resp
    });
    Ok(resp)
}
