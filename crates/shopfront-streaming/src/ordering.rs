//! Out-of-order streaming support.
//!
//! Deferred sections are sent as soon as their data arrives, so they can
//! land in any order. Each is wrapped in a `data-section` element and a
//! small script, placed inside the same container, restores the declared
//! order in the browser.

use crate::escape::escape_html;

/// Wrap section HTML with a data attribute for reordering.
pub fn wrap_section_for_reorder(section_id: &str, html: &str) -> String {
    format!(
        r#"<div data-section="{}">{}</div>"#,
        escape_html(section_id),
        html
    )
}

/// Generate JavaScript that appends sections in `section_ids` order.
///
/// Must be emitted inside the container that holds the wrapped sections.
pub fn generate_reorder_script(section_ids: &[&str]) -> String {
    let ids_json = serde_json::to_string(section_ids).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<script>
(function() {{
  const order = {};
  const container = document.currentScript.parentElement;
  const sections = {{}};
  container.querySelectorAll(':scope > [data-section]').forEach(el => {{
    sections[el.dataset.section] = el;
  }});
  order.forEach(id => {{
    if (sections[id]) {{
      container.appendChild(sections[id]);
    }}
  }});
}})();
</script>"#,
        ids_json.replace("</", "<\\/")
    )
}
