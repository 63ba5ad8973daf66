// src/router/listings.rs
//
// Broker dashboard plus the per-listing pages. Ownership is enforced by the
// API; the checks here only decide what to show.
use crate::domain::{Listing, User};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_response_with_status, redirect};
use crate::router::forms::{FormData, ListingForm};
use crate::router::AppState;
use crate::templates::pages::{self, UploadVm};
use crate::templates::Notice;
use tracing::warn;

pub fn upload_page(state: &AppState, user: &User, notice: Option<Notice>) -> ResultResp {
    render_dashboard(state, user, &ListingForm::default(), notice, None, 200)
}

pub fn upload(state: &AppState, user: &User, form: FormData) -> ResultResp {
    let form = ListingForm::from_form(&form);

    let body = match form.to_new_listing(user.id) {
        Ok(body) => body,
        Err(msg) => return render_dashboard(state, user, &form, None, Some(msg), 400),
    };

    // Create first, then the redirect re-fetches the broker's list.
    match state.api.create(&body) {
        Ok(_) => redirect(&format!("/upload?notice={}", Notice::Uploaded.as_param())),
        Err(e) => {
            warn!(kind = e.kind().as_str(), error = %e, "upload failed");
            let msg = format!("Failed to upload accommodation: {e}");
            render_dashboard(state, user, &form, None, Some(msg), 502)
        }
    }
}

pub fn details(
    state: &AppState,
    user: Option<&User>,
    id: i64,
    notice: Option<Notice>,
) -> ResultResp {
    let listing = fetch(state, id)?;
    html_response(pages::details_page(user, &listing, notice))
}

pub fn edit_page(state: &AppState, user: &User, id: i64) -> ResultResp {
    let listing = fetch(state, id)?;
    if listing.broker_id != user.id {
        return not_owner(id);
    }
    html_response(pages::edit_page(user, id, &ListingForm::from_listing(&listing), None))
}

pub fn edit(state: &AppState, user: &User, id: i64, form: FormData) -> ResultResp {
    let form = ListingForm::from_form(&form);

    let body = match form.to_new_listing(user.id) {
        Ok(body) => body,
        Err(msg) => {
            return html_response_with_status(400, pages::edit_page(user, id, &form, Some(&msg)))
        }
    };

    match state.api.update(id, &body) {
        Ok(_) => redirect(&format!(
            "/accommodation/{id}?notice={}",
            Notice::Updated.as_param()
        )),
        Err(e) => {
            warn!(id, kind = e.kind().as_str(), error = %e, "update failed");
            let msg = format!("Failed to update accommodation: {e}");
            html_response_with_status(502, pages::edit_page(user, id, &form, Some(&msg)))
        }
    }
}

pub fn delete(state: &AppState, user: &User, id: i64) -> ResultResp {
    match state.api.delete(id) {
        Ok(()) => redirect(&format!("/upload?notice={}", Notice::Deleted.as_param())),
        Err(e) => {
            warn!(id, kind = e.kind().as_str(), error = %e, "delete failed");
            let msg = format!("Failed to delete accommodation: {e}");
            render_dashboard(state, user, &ListingForm::default(), None, Some(msg), 502)
        }
    }
}

fn fetch(state: &AppState, id: i64) -> Result<Listing, ServerError> {
    state.api.get_by_id(id).map_err(|e| match e.status() {
        Some(404) => ServerError::NotFound,
        _ => ServerError::Api(e),
    })
}

fn not_owner(id: i64) -> ResultResp {
    redirect(&format!(
        "/accommodation/{id}?notice={}",
        Notice::NotOwner.as_param()
    ))
}

fn render_dashboard(
    state: &AppState,
    user: &User,
    form: &ListingForm,
    notice: Option<Notice>,
    error: Option<String>,
    status: u16,
) -> ResultResp {
    let (listings, error, status) = match state.api.list_by_broker(user.id) {
        Ok(listings) => (listings, error, status),
        Err(e) => {
            warn!(
                broker_id = user.id,
                kind = e.kind().as_str(),
                error = %e,
                "fetching broker listings failed"
            );
            let fetch_err = format!("Failed to fetch accommodations: {e}");
            let error = Some(match error {
                Some(prev) => format!("{prev}. {fetch_err}"),
                None => fetch_err,
            });
            (Vec::new(), error, if status == 200 { 502 } else { status })
        }
    };

    html_response_with_status(
        status,
        pages::upload_page(&UploadVm {
            user,
            listings: &listings,
            form,
            notice,
            error,
        }),
    )
}
