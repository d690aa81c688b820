use leptos::prelude::*;

use crate::controller::{header_text, DetailView, SearchController, DETAIL_FAILED_MESSAGE};

#[component]
pub fn ArtistDetails(controller: RwSignal<SearchController>) -> impl IntoView {
    let detail = Memo::new(move |_| controller.with(|c| c.detail().clone()));
    let display = move || {
        detail.with(|d| match d {
            DetailView::Shown(_) | DetailView::Failed => "block",
            DetailView::Empty | DetailView::Hidden => "none",
        })
    };

    view! {
        <div id="artist-details" style:display=display>
            {move || match detail.get() {
                DetailView::Shown(artist) => {
                    let header = header_text(&artist);
                    let nationality = artist.nationality().map(str::to_string);
                    let biography = artist.biography().map(str::to_string);
                    view! {
                        <div class="artist-name">
                            <h2 id="artist-name">{header}</h2>
                        </div>
                        <div class="artist-nationality">
                            {nationality
                                .map(|nationality| {
                                    view! { <p id="artist-nationality">{nationality}</p> }
                                })}
                        </div>
                        <div id="artist-biography-container">
                            {biography
                                .map(|biography| view! { <p id="artist-biography">{biography}</p> })}
                        </div>
                    }
                        .into_any()
                }
                DetailView::Failed => view! { <p>{DETAIL_FAILED_MESSAGE}</p> }.into_any(),
                DetailView::Empty | DetailView::Hidden => ().into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::components::{opening_tag, render};
    use crate::controller::{SearchConfig, Submission};
    use crate::error::AppError;
    use galleria_api_types::{ArtistDetail, SearchResultItem};

    fn completed(result: crate::error::AppResult<Option<ArtistDetail>>) -> String {
        render(move || {
            let mut controller = SearchController::new(SearchConfig::full());
            controller.set_query("picasso".to_string());
            let Submission::Search(search) = controller.submit() else {
                panic!("expected a search");
            };
            let item = SearchResultItem {
                id: "picasso".to_string(),
                name: "Pablo Picasso".to_string(),
                image: "picasso.jpg".to_string(),
            };
            assert!(controller.complete_search(search.ticket, Ok(vec![item])));
            let request = controller
                .select("picasso".to_string())
                .expect("card is present");
            assert!(controller.complete_detail(request.ticket, result));
            let controller = RwSignal::new(controller);
            view! { <ArtistDetails controller /> }
        })
    }

    #[test]
    fn shows_header_and_known_fields() {
        let html = completed(Ok(Some(ArtistDetail {
            name: Some("Pablo Picasso".to_string()),
            birthday: Some("1881".to_string()),
            deathday: Some("1973".to_string()),
            nationality: Some("Spanish".to_string()),
            biography: Some("Cubist.".to_string()),
            image: None,
        })));
        assert!(opening_tag(&html, "id=\"artist-details\"").contains("display:block"));
        assert!(html.contains("Pablo Picasso (1881 - 1973)"));
        assert!(html.contains("id=\"artist-nationality\""));
        assert!(html.contains("Cubist."));
    }

    #[test]
    fn empty_fields_are_left_out() {
        let html = completed(Ok(Some(ArtistDetail {
            name: None,
            nationality: Some(String::new()),
            biography: Some(String::new()),
            ..Default::default()
        })));
        assert!(html.contains("Unknown Artist (-)"));
        assert!(!html.contains("id=\"artist-nationality\""));
        assert!(!html.contains("id=\"artist-biography\""));
    }

    #[test]
    fn missing_artist_hides_the_panel() {
        let html = completed(Ok(None));
        assert!(opening_tag(&html, "id=\"artist-details\"").contains("display:none"));
        assert!(!html.contains("id=\"artist-name\""));
    }

    #[test]
    fn failed_lookup_shows_the_message() {
        let html = completed(Err(AppError::Status(502)));
        assert!(opening_tag(&html, "id=\"artist-details\"").contains("display:block"));
        assert!(html.contains(DETAIL_FAILED_MESSAGE));
    }
}
