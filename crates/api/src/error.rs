//! Failure pages. Every failure becomes a structured value (kind + messages) rendered
//! through the `error` template with a link back to the form.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bankruptcy_core::copy::error_copy;
use bankruptcy_core::domain::Language;
use bankruptcy_core::pipeline::{ErrorKind, PipelineError};
use serde::Serialize;
use std::any::Any;
use uuid::Uuid;

use crate::render::Renderer;

#[derive(Debug)]
pub enum Failure {
    Pipeline(PipelineError),
    Internal { lang: Language, error: anyhow::Error },
}

impl From<PipelineError> for Failure {
    fn from(err: PipelineError) -> Self {
        Failure::Pipeline(err)
    }
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Failure::Pipeline(err) => err.kind(),
            Failure::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Mapping | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn lang(&self) -> Language {
        match self {
            Failure::Pipeline(err) => err.lang(),
            Failure::Internal { lang, .. } => *lang,
        }
    }

    fn messages(&self) -> Vec<String> {
        match self {
            Failure::Pipeline(err) => err.messages(),
            Failure::Internal { error, .. } => vec![error.to_string()],
        }
    }

    /// Logs and reports server-side failures; returns the incident id shown to the user.
    fn report(self) -> (Option<Uuid>, Vec<String>) {
        let messages = self.messages();
        let kind = self.kind();
        if kind == ErrorKind::Validation {
            return (None, messages);
        }

        let incident = Uuid::new_v4();
        let error = match self {
            Failure::Pipeline(err) => anyhow::Error::new(err),
            Failure::Internal { error, .. } => error,
        };
        let chain = format!("{error:#}");
        tracing::error!(%incident, ?kind, error = %chain, "request failed");
        sentry_anyhow::capture_anyhow(&error);
        (Some(incident), messages)
    }
}

#[derive(Debug, Serialize)]
struct ErrorPage {
    lang: Language,
    kind: ErrorKind,
    title: &'static str,
    lead: &'static str,
    messages: Vec<String>,
    incident_label: &'static str,
    incident_id: Option<String>,
    back_href: String,
    back_label: &'static str,
}

pub fn failure_response(renderer: &Renderer, failure: Failure) -> Response {
    let status = failure.status();
    let kind = failure.kind();
    let lang = failure.lang();
    let (incident, messages) = failure.report();

    let copy = error_copy(lang);
    let (title, lead) = match kind {
        ErrorKind::Validation => (copy.validation_title, copy.validation_lead),
        ErrorKind::Mapping | ErrorKind::Internal => (copy.internal_title, copy.internal_lead),
    };

    let page = ErrorPage {
        lang,
        kind,
        title,
        lead,
        messages,
        incident_label: copy.incident_label,
        incident_id: incident.map(|id| id.to_string()),
        back_href: format!("/form?lang={lang}"),
        back_label: copy.back_form,
    };

    match renderer.render("error", &page) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            let chain = format!("{err:#}");
            tracing::error!(error = %chain, "error page render failed");
            let mut body = format!("{}\n{}\n", page.title, page.messages.join("\n"));
            if let Some(id) = &page.incident_id {
                body.push_str(&format!("{}: {id}\n", page.incident_label));
            }
            body.push_str(&page.back_href);
            (status, body).into_response()
        }
    }
}

/// Turns a handler panic into the internal-error page instead of a dropped connection.
pub fn panic_response(renderer: &Renderer, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    failure_response(
        renderer,
        Failure::Internal {
            lang: Language::default(),
            error: anyhow::anyhow!("handler panicked: {detail}"),
        },
    )
}
