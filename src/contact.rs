use std::time::Duration;

use reqwest::{multipart::Form, Client, Url};

use crate::{error::Error, ui::ViewState, RELAY_COUNTER};

/// Largest accepted body for a contact form post.
pub const MAX_FORM_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A posted contact form: the message plus the view the visitor posted it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub message: ContactMessage,
    pub view: ViewState,
}

impl ContactForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Every message field is required, blank values count as missing.
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        let mut name = None;
        let mut email = None;
        let mut message = None;
        let mut view = ViewState::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "name" => name = Some(value.into_owned()),
                "email" => email = Some(value.into_owned()),
                "message" => message = Some(value.into_owned()),
                key => {
                    view.apply(key, &value)?;
                }
            }
        }

        Ok(ContactForm {
            message: ContactMessage {
                name: required("name", name)?,
                email: required("email", email)?,
                message: required("message", message)?,
            },
            view,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingField(field)),
    }
}

/// Client of the third party service forwarding contact messages by email.
pub struct FormRelay {
    http: Client,
    endpoint: Url,
    access_key: String,
}

impl FormRelay {
    pub fn new(
        endpoint: Url,
        access_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::RelayUrl(endpoint.to_string()));
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(FormRelay {
            http: builder.build()?,
            endpoint,
            access_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Forward `message` with a single multipart POST, any 2xx is a delivery.
    pub async fn deliver(&self, message: &ContactMessage) -> Result<(), Error> {
        let form = Form::new()
            .text("name", message.name.clone())
            .text("email", message.email.clone())
            .text("message", message.message.clone())
            .text("access_key", self.access_key.clone());

        let result = match self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(Error::RelayStatus(resp.status())),
            Err(e) => Err(Error::Relay(e)),
        };

        match &result {
            Ok(()) => {
                log::info!("contact message from {} relayed", message.email);
                RELAY_COUNTER.with_label_values(&["success"]).inc();
            }
            Err(e) => {
                log::warn!("contact message from {} not relayed: {}", message.email, e);
                RELAY_COUNTER.with_label_values(&["error"]).inc();
            }
        }
        result
    }
}
