pub mod artist_card;
pub mod artist_details;
pub mod loading;
pub mod search_box;
pub mod search_results;

/// Renders a view to HTML inside a fresh reactive owner.
#[cfg(test)]
pub(crate) fn render<V>(view: impl FnOnce() -> V) -> String
where
    V: leptos::prelude::RenderHtml,
{
    let owner = leptos::prelude::Owner::new();
    owner.with(|| view().to_html())
}

/// The opening tag of the element whose markup contains `needle`, with spaces removed.
#[cfg(test)]
pub(crate) fn opening_tag(html: &str, needle: &str) -> String {
    let at = html
        .find(needle)
        .unwrap_or_else(|| panic!("{needle} not rendered in {html}"));
    let start = html[..at].rfind('<').unwrap_or(0);
    let end = at + html[at..].find('>').unwrap_or(html.len() - at);
    html[start..end].replace(' ', "")
}
