/// CSS for every storefront page.
pub(crate) const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; color: #222; background: #fafafa; }
a { color: #1d4ed8; }
.button { display: inline-block; padding: 0.6rem 1.2rem; background: #111; color: #fff; border: 0; border-radius: 4px; text-decoration: none; cursor: pointer; }

.site-header { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #e5e5e5; }
.site-logo { font-weight: 700; font-size: 1.25rem; color: #111; text-decoration: none; }
.site-search input { padding: 0.4rem 0.8rem; border: 1px solid #ccc; border-radius: 4px; }
.site-footer { padding: 2rem; text-align: center; color: #777; font-size: 0.875rem; }

.page { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.page--product { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.page--product > *:not(.product-gallery):not(.product-summary) { grid-column: 1 / -1; }
@media (max-width: 768px) { .page--product { grid-template-columns: 1fr; } }

.product-gallery .gallery-main { width: 100%; border-radius: 8px; background: #eee; }
.gallery-placeholder { aspect-ratio: 1; background: #eee; border-radius: 8px; }
.gallery-thumbnails { display: flex; gap: 0.5rem; list-style: none; margin-top: 0.5rem; }
.gallery-thumbnails img { width: 72px; height: 72px; object-fit: cover; border-radius: 4px; }

.product-brand { color: #666; text-transform: uppercase; font-size: 0.8rem; letter-spacing: 0.05em; }
.product-title { font-size: 2rem; margin-bottom: 1rem; }

.price { margin: 1rem 0; }
.price-msrp { color: #777; font-size: 0.875rem; }
.price-current, .price-now, .price-range { font-size: 1.5rem; font-weight: 700; }
.price-now { color: #b91c1c; }
.price-was { color: #777; margin-right: 0.75rem; }

.product-option { border: 0; margin: 1rem 0; }
.product-option legend { font-weight: 600; margin-bottom: 0.5rem; }
.option-required { color: #b91c1c; }
.option-value { display: inline-flex; align-items: center; gap: 0.35rem; margin-right: 1rem; }
.product-option--rectangle .option-value { border: 1px solid #ccc; padding: 0.3rem 0.8rem; border-radius: 4px; }
.product-option--rectangle .option-value--selected { border-color: #111; }
.swatch { display: inline-block; width: 1.25rem; height: 1.25rem; border-radius: 50%; border: 1px solid #ccc; }
.option-links { list-style: none; }

.rich-text p { margin-bottom: 1rem; }
.product-details dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1.5rem; }
.product-details dt { font-weight: 600; }

.review-summary { display: flex; gap: 0.5rem; align-items: baseline; }
.stars { color: #f59e0b; letter-spacing: 0.1em; }
.review-list { list-style: none; }
.review { padding: 1rem 0; border-bottom: 1px solid #e5e5e5; }
.review-meta { color: #777; font-size: 0.875rem; }

.card-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; list-style: none; margin-top: 1rem; }
.product-card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.product-card img, .card-image-placeholder { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 4px; background: #eee; }
.card-title { font-size: 1rem; }
.card-title a { color: inherit; text-decoration: none; }

.contact-form form { display: flex; flex-direction: column; gap: 1rem; max-width: 560px; }
.form-field { display: flex; flex-direction: column; gap: 0.25rem; }
.form-field input, .form-field textarea { padding: 0.5rem; border: 1px solid #ccc; border-radius: 4px; font: inherit; }
.field-error, .form-errors { color: #b91c1c; font-size: 0.875rem; }
.form-success { padding: 1rem; background: #ecfdf5; border-radius: 4px; }

.search-header form { display: flex; gap: 0.5rem; margin: 1rem 0; }
.search-header input { flex: 1; padding: 0.6rem; border: 1px solid #ccc; border-radius: 4px; }
.search-count, .search-prompt, .search-empty { color: #555; }

.status-page { text-align: center; padding: 4rem 0; }
.status-page h1 { margin-bottom: 1rem; }
.section-error { padding: 1rem; background: #fef2f2; color: #991b1b; border-radius: 4px; }
"#;
