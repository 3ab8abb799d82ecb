//! Shared page chrome.

use shopfront_core::StoreSettings;
use shopfront_streaming::{escape_html, HeadContent, Shell};

use crate::styles::STOREFRONT_STYLES;

/// Head with the store title suffix and the storefront styles.
pub(crate) fn head(store: &StoreSettings, title: &str) -> HeadContent {
    let title = if title.is_empty() || title == store.name {
        store.name.clone()
    } else {
        format!("{} | {}", title, store.name)
    };
    HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(STOREFRONT_STYLES)
}

/// Shell with the store header and footer. `page_class` names the page
/// layout on `<main>`.
pub(crate) fn shell(store: &StoreSettings, head: HeadContent, page_class: &str) -> Shell {
    let name = escape_html(&store.name);

    Shell::new(head)
        .with_body_start(format!(
            r#"<body>
<header class="site-header">
    <a class="site-logo" href="/">{name}</a>
    <form class="site-search" method="get" action="/search" role="search">
        <input type="search" name="term" placeholder="Search" aria-label="Search products">
    </form>
</header>
<main class="page page--{page_class}">
"#,
            name = name,
            page_class = page_class
        ))
        .with_body_end(format!(
            r#"</main>
<footer class="site-footer">
    <p>&copy; {name}</p>
</footer>
</body>
</html>"#,
            name = name
        ))
}
