use crate::errors::ServerError;
use crate::residents::{ResidencyStatus, ResidentId, ResidentsApi};
use crate::responses::{html_response, ResultResp};
use crate::review::{FlashSink, ReviewController};
use crate::templates::pages::{home_page, review_page, ReviewVm};
use astra::Request;
use parking_lot::{Mutex, MutexGuard};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Shared server state: the one review page and its notification queue.
pub struct AppState<A> {
    controller: Mutex<ReviewController<A, FlashSink>>,
    flash: FlashSink,
}

impl<A: ResidentsApi> AppState<A> {
    pub fn new(controller: ReviewController<A, FlashSink>, flash: FlashSink) -> Self {
        Self {
            controller: Mutex::new(controller),
            flash,
        }
    }

    pub fn controller(&self) -> MutexGuard<'_, ReviewController<A, FlashSink>> {
        self.controller.lock()
    }
}

pub fn handle<A: ResidentsApi>(req: Request, app: &AppState<A>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        // Leaving the review page discards its state.
        ("GET", [""]) => {
            app.controller().unmount();
            html_response(home_page())
        }

        ("GET", ["admin", "review"]) => {
            let mut ctrl = app.controller();
            ctrl.mount();
            render(app, &ctrl)
        }

        ("POST", ["admin", "review", "details", "close"]) => {
            let mut ctrl = app.controller();
            ctrl.close_details();
            render(app, &ctrl)
        }

        ("POST", ["admin", "review", "update", "close"]) => {
            let mut ctrl = app.controller();
            ctrl.close_update();
            render(app, &ctrl)
        }

        ("GET", ["admin", "review", id]) => {
            let id = decode_segment(id);
            let mut ctrl = app.controller();
            if !ctrl.open_details(&id) {
                return Err(ServerError::NotFound);
            }
            render(app, &ctrl)
        }

        ("GET", ["admin", "review", id, "update"]) => {
            let id = decode_segment(id);
            let mut ctrl = app.controller();
            if !ctrl.open_update(&id) {
                return Err(ServerError::NotFound);
            }
            render(app, &ctrl)
        }

        ("POST", ["admin", "review", id, "status"]) => {
            let id = decode_segment(id);
            let form = parse_form(req)?;

            let residency_status = match form.get("residency_status").map(|s| s.trim()) {
                None | Some("") => None,
                Some(raw) => Some(ResidencyStatus::parse(raw).ok_or_else(|| {
                    ServerError::BadRequest(format!("unknown residency status: {raw}"))
                })?),
            };
            let status_notes = form.get("status_notes").cloned().unwrap_or_default();

            let mut ctrl = app.controller();
            match &ctrl.state().update {
                Some(modal) if modal.target.id == id => {}
                Some(_) => {
                    return Err(ServerError::Conflict(format!(
                        "Resident {id} is not the one being updated. Reopen the update form and try again."
                    )));
                }
                None => {
                    tracing::warn!(%id, "status submitted with no open update form");
                    return Err(ServerError::Conflict(format!(
                        "The update form for resident {id} is no longer open. Reopen it and try again."
                    )));
                }
            }

            ctrl.edit_draft(residency_status, status_notes);
            ctrl.submit_update();
            render(app, &ctrl)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn render<A: ResidentsApi>(
    app: &AppState<A>,
    ctrl: &ReviewController<A, FlashSink>,
) -> ResultResp {
    let vm = ReviewVm {
        state: ctrl.state(),
        flashes: app.flash.take(),
    };
    html_response(review_page(&vm))
}

fn decode_segment(raw: &str) -> ResidentId {
    ResidentId::new(percent_decode_str(raw).decode_utf8_lossy())
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    if let Some(ct) = req.headers().get("Content-Type") {
        let ct = ct
            .to_str()
            .ok()
            .and_then(|s| s.parse::<mime::Mime>().ok())
            .ok_or_else(|| ServerError::BadRequest("invalid Content-Type".into()))?;
        if ct.essence_str() != mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
            return Err(ServerError::BadRequest(format!(
                "expected a form body, got {ct}"
            )));
        }
    }

    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    Ok(form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}
