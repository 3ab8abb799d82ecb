//! Search page renderers.

use shopfront_streaming::escape_html;

use crate::page::SearchView;
use crate::sections::render_product_card;

/// Render the search form, prefilled with the current term.
pub fn render_search_form(term: &str) -> String {
    format!(
        r#"<section class="search-header" data-section="search-form">
    <h1>Search</h1>
    <form method="get" action="/search" role="search">
        <input type="search" name="term" value="{}" placeholder="Search products" aria-label="Search products">
        <button type="submit" class="button">Search</button>
    </form>
</section>"#,
        escape_html(term)
    )
}

/// Render search results, the prompt for an empty term, or the
/// no-results message.
pub fn render_search_results(view: &SearchView) -> String {
    if view.term.is_empty() {
        return r#"<section class="search-results" data-section="results">
    <p class="search-prompt">Enter a search term to find products.</p>
</section>"#
            .to_string();
    }

    if view.results.is_empty() {
        return format!(
            r#"<section class="search-results" data-section="results">
    <p class="search-empty">No products found for "{}".</p>
</section>"#,
            escape_html(&view.term)
        );
    }

    let noun = if view.results.len() == 1 { "result" } else { "results" };
    let cards: String = view.results.iter().map(render_product_card).collect();

    format!(
        r#"<section class="search-results" data-section="results">
    <p class="search-count">{count} {noun} for "{term}"</p>
    <ul class="card-list">{cards}</ul>
</section>"#,
        count = view.results.len(),
        noun = noun,
        term = escape_html(&view.term),
        cards = cards
    )
}
