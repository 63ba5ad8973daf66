// src/router/search.rs
use crate::domain::User;
use crate::errors::ResultResp;
use crate::responses::{html_response, html_response_with_status};
use crate::router::AppState;
use crate::search::{filter_and_sort, SearchCriteria};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{search_page, SearchVm};
use crate::templates::Notice;
use tracing::{debug, warn};

pub fn search(
    state: &AppState,
    user: &User,
    query: Option<&str>,
    notice: Option<Notice>,
) -> ResultResp {
    let criteria = SearchCriteria::from_query(query);

    match state.api.list_all() {
        Ok(all) => {
            let view = filter_and_sort(&all, &criteria);
            debug!(total = all.len(), shown = view.len(), "search view derived");
            html_response(search_page(&SearchVm {
                user,
                criteria: &criteria,
                listings: view,
                notice,
                error: None,
            }))
        }
        Err(e) => {
            warn!(kind = e.kind().as_str(), error = %e, "fetching accommodations failed");
            let vm = SearchVm {
                user,
                criteria: &criteria,
                listings: Vec::new(),
                notice,
                error: Some(format!("Error fetching accommodations: {e}")),
            };
            html_response_with_status(502, search_page(&vm))
        }
    }
}

pub fn export(state: &AppState, query: Option<&str>) -> ResultResp {
    let criteria = SearchCriteria::from_query(query);
    let all = state.api.list_all()?;
    let view = filter_and_sort(&all, &criteria);
    export_listings_xlsx(&view, criteria.sort)
}
