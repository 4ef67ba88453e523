use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use bankruptcy_core::copy::{form_copy, index_copy, result_copy, FormCopy, IndexCopy, ResultCopy};
use bankruptcy_core::domain::{Language, FIELDS};
use bankruptcy_core::pipeline::{lang_param, Outcome, RawRequest, ResponseModel};
use serde::Serialize;

use crate::error::{failure_response, Failure};
use crate::extract::FormFields;
use crate::AppState;

type QueryPairs = Query<Vec<(String, String)>>;

fn query_lang(query: &[(String, String)]) -> Language {
    Language::pick(lang_param(query))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub version: &'static str,
    /// RFC 3339 timestamp of the fit, when the artifact records one.
    pub trained_at: Option<String>,
}

pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.pipeline.classifier_name().to_string(),
        version: env!("CARGO_PKG_VERSION"),
        trained_at: state
            .pipeline
            .classifier_trained_at()
            .map(|at| at.to_rfc3339()),
    })
}

#[derive(Debug, Serialize)]
struct IndexPage {
    lang: Language,
    other_lang: Language,
    content: &'static IndexCopy,
}

pub async fn index(State(state): State<AppState>, Query(query): QueryPairs) -> Response {
    let lang = query_lang(&query);
    let page = IndexPage {
        lang,
        other_lang: lang.other(),
        content: index_copy(lang),
    };
    render_page(&state, "index", &page, lang)
}

#[derive(Debug, Serialize)]
struct FormField {
    key: &'static str,
    label: &'static str,
    tooltip: &'static str,
}

#[derive(Debug, Serialize)]
struct FormPage {
    lang: Language,
    other_lang: Language,
    content: &'static FormCopy,
    fields: Vec<FormField>,
}

pub async fn show_form(State(state): State<AppState>, Query(query): QueryPairs) -> Response {
    let lang = query_lang(&query);
    let page = FormPage {
        lang,
        other_lang: lang.other(),
        content: form_copy(lang),
        fields: FIELDS
            .iter()
            .map(|f| FormField {
                key: f.key,
                label: f.labels.get(lang),
                tooltip: f.tooltips.get(lang),
            })
            .collect(),
    };
    render_page(&state, "form", &page, lang)
}

pub async fn result_get(State(state): State<AppState>, Query(query): QueryPairs) -> Response {
    respond(&state, RawRequest::from_query(query))
}

pub async fn result_post(
    State(state): State<AppState>,
    Query(query): QueryPairs,
    FormFields(body): FormFields,
) -> Response {
    respond(&state, RawRequest::from_form(query, body))
}

#[derive(Debug, Serialize)]
struct ResultPage<'a> {
    #[serde(flatten)]
    model: &'a ResponseModel,
    other_lang: Language,
    content: &'static ResultCopy,
}

fn respond(state: &AppState, request: RawRequest) -> Response {
    match state.pipeline.run(&request) {
        Ok(Outcome::Rendered(model)) => {
            let lang = model.lang;
            let page = ResultPage {
                model: &model,
                other_lang: lang.other(),
                content: result_copy(lang),
            };
            render_page(state, "result", &page, lang)
        }
        Ok(Outcome::RedirectToForm { lang }) => {
            Redirect::to(&format!("/form?lang={lang}")).into_response()
        }
        Err(err) => failure_response(&state.renderer, Failure::from(err)),
    }
}

fn render_page<T: Serialize>(state: &AppState, name: &str, page: &T, lang: Language) -> Response {
    match state.renderer.render(name, page) {
        Ok(body) => Html(body).into_response(),
        Err(error) => failure_response(&state.renderer, Failure::Internal { lang, error }),
    }
}
