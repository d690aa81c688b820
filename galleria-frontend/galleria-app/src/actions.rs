use leptos::{prelude::*, task::spawn_local};

use crate::api;
use crate::controller::{SearchController, SearchRequest, Submission};

/// Submits the search field. The caller reports field validity when this returns
/// [`Submission::Invalid`].
pub(crate) fn submit_search(controller: RwSignal<SearchController>) -> Submission {
    let Some(submission) = controller.try_update(SearchController::submit) else {
        return Submission::Ignored;
    };
    if let Submission::Search(request) = &submission {
        run_search(controller, request.clone());
    }
    submission
}

fn run_search(controller: RwSignal<SearchController>, request: SearchRequest) {
    log::debug!("Searching for: {}", request.query);
    spawn_local(async move {
        let result = api::search_artists(&request.path()).await;
        controller.update(|c| {
            if !c.complete_search(request.ticket, result) {
                log::debug!("dropping stale results for {}", request.query);
            }
        });
    });
}

pub(crate) fn select_artist(controller: RwSignal<SearchController>, artist_id: String) {
    let Some(request) = controller.try_update(|c| c.select(artist_id)).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = api::get_artist(&request.path()).await;
        controller.update(|c| {
            if !c.complete_detail(request.ticket, result) {
                log::debug!("dropping stale details for {}", request.artist_id);
            }
        });
    });
}
