//! Review renderers.

use shopfront_commerce::prelude::*;
use shopfront_streaming::escape_html;

fn stars(filled: u8) -> String {
    let filled = filled.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Render the rating summary.
pub fn render_review_summary(summary: &ReviewSummary) -> String {
    if !summary.has_reviews() {
        return r#"<div class="review-summary review-summary--empty">No reviews yet</div>"#
            .to_string();
    }

    let noun = if summary.number_of_reviews == 1 {
        "review"
    } else {
        "reviews"
    };

    format!(
        r#"<div class="review-summary">
    <span class="stars" aria-label="{avg:.1} out of 5">{stars}</span>
    <span class="rating-average">{avg:.1}</span>
    <span class="rating-count">({count} {noun})</span>
</div>"#,
        avg = summary.average_rating,
        stars = stars(summary.stars()),
        count = summary.number_of_reviews,
        noun = noun
    )
}

/// Render the review list.
pub fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return String::new();
    }

    let items: String = reviews
        .iter()
        .map(|review| {
            let date = review.created_at.get(..10).unwrap_or(&review.created_at);
            format!(
                r#"<li class="review">
        <div class="review-header">
            <span class="stars">{stars}</span>
            <strong class="review-title">{title}</strong>
        </div>
        <p class="review-meta">{author} <time datetime="{created}">{date}</time></p>
        <p class="review-text">{text}</p>
    </li>"#,
                stars = stars(review.rating),
                title = escape_html(&review.title),
                author = escape_html(&review.author_name),
                created = escape_html(&review.created_at),
                date = escape_html(date),
                text = escape_html(&review.text)
            )
        })
        .collect();

    format!(
        r#"<section class="product-reviews">
    <h2>Reviews</h2>
    <ul class="review-list">
    {}
    </ul>
</section>"#,
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = ReviewSummary {
            average_rating: 4.4,
            number_of_reviews: 12,
        };
        let html = render_review_summary(&summary);
        assert!(html.contains("★★★★☆"));
        assert!(html.contains("4.4"));
        assert!(html.contains("(12 reviews)"));

        let empty = render_review_summary(&ReviewSummary::default());
        assert!(empty.contains("No reviews yet"));
    }

    #[test]
    fn test_review_list_escapes() {
        let reviews = vec![Review {
            entity_id: ReviewId::new(1),
            title: "<b>Great</b>".into(),
            text: "Loved it".into(),
            rating: 5,
            author_name: "Sam".into(),
            created_at: "2024-05-01T10:00:00Z".into(),
        }];
        let html = render_reviews(&reviews);
        assert!(html.contains("&lt;b&gt;Great&lt;/b&gt;"));
        assert!(html.contains(">2024-05-01</time>"));
        assert!(html.contains("★★★★★"));
        assert_eq!(render_reviews(&[]), "");
    }
}
