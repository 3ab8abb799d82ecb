//! Option pickers.
//!
//! Every control links to the product URL with its value selected on top
//! of the current query, so a selection survives reloads and can be shared.
//! The inline script follows that link on `change`; without scripts the
//! label link does the same.

use shopfront_commerce::prelude::*;
use shopfront_streaming::escape_html;

use crate::page::ProductView;

const OPTION_SCRIPT: &str = r#"<script>
document.querySelectorAll('form.product-options').forEach(function (form) {
  form.addEventListener('change', function (event) {
    var target = event.target;
    var href = target.dataset.href;
    if (!href && target.selectedOptions && target.selectedOptions[0]) {
      href = target.selectedOptions[0].dataset.href;
    }
    if (href) {
      window.location.assign(href);
    }
  });
});
</script>"#;

/// Product URL with `value` selected for `option`.
pub fn option_href(view: &ProductView, option: OptionId, value: ValueId) -> String {
    select_option_value(&view.query, option, value).href(&view.path)
}

/// Render all option pickers, or nothing for a product without options.
pub fn render_options(view: &ProductView) -> String {
    let options = &view.product.product_options;
    if options.is_empty() {
        return String::new();
    }

    let pickers: String = options
        .iter()
        .map(|option| render_option(view, option))
        .collect();

    format!(
        r#"<form class="product-options" method="get" action="{action}">
{pickers}</form>
{script}"#,
        action = escape_html(&view.path),
        pickers = pickers,
        script = OPTION_SCRIPT
    )
}

fn legend(option: &ProductOption) -> String {
    let required = if option.is_required {
        r#" <span class="option-required" aria-hidden="true">*</span>"#
    } else {
        ""
    };
    format!(
        "<legend>{}{}</legend>",
        escape_html(&option.display_name),
        required
    )
}

fn render_option(view: &ProductView, option: &ProductOption) -> String {
    let selected = option.selected_value_id(&view.selection);

    match &option.kind {
        OptionKind::MultipleChoice {
            display_style: DisplayStyle::DropdownList,
            values,
        } => render_dropdown(view, option, values, selected),
        OptionKind::MultipleChoice {
            display_style,
            values,
        } => {
            let controls: String = values
                .iter()
                .map(|value| render_radio(view, option, value, selected == Some(value.entity_id)))
                .collect();
            format!(
                r#"<fieldset class="product-option product-option--{style}" data-option-id="{id}">
    {legend}
    {controls}
</fieldset>
"#,
                style = display_style.as_str(),
                id = option.entity_id,
                legend = legend(option),
                controls = controls
            )
        }
        OptionKind::Checkbox {
            label,
            checked_value_id,
            unchecked_value_id,
        } => {
            let checked = option.is_checked(&view.selection);
            let toggle = if checked {
                *unchecked_value_id
            } else {
                *checked_value_id
            };
            let href = escape_html(&option_href(view, option.entity_id, toggle));
            format!(
                r#"<fieldset class="product-option product-option--checkbox" data-option-id="{id}">
    {legend}
    <label class="option-value">
        <input type="checkbox" name="attribute[{id}]" value="{value}" data-href="{href}"{checked}>
        <a href="{href}">{label}</a>
    </label>
</fieldset>
"#,
                id = option.entity_id,
                legend = legend(option),
                value = checked_value_id,
                href = href,
                checked = if checked { " checked" } else { "" },
                label = escape_html(label)
            )
        }
    }
}

fn render_radio(
    view: &ProductView,
    option: &ProductOption,
    value: &OptionValue,
    is_selected: bool,
) -> String {
    let href = escape_html(&option_href(view, option.entity_id, value.entity_id));
    let swatches: String = value
        .hex_colors
        .iter()
        .map(|color| {
            format!(
                r#"<span class="swatch" style="background-color: {}"></span>"#,
                escape_html(color)
            )
        })
        .collect();

    format!(
        r#"<label class="option-value{selected_class}">
        <input type="radio" name="attribute[{option}]" value="{value}" data-href="{href}"{checked}>
        {swatches}<a href="{href}">{label}</a>
    </label>"#,
        selected_class = if is_selected { " option-value--selected" } else { "" },
        option = option.entity_id,
        value = value.entity_id,
        href = href,
        checked = if is_selected { " checked" } else { "" },
        swatches = swatches,
        label = escape_html(&value.label)
    )
}

fn render_dropdown(
    view: &ProductView,
    option: &ProductOption,
    values: &[OptionValue],
    selected: Option<ValueId>,
) -> String {
    let placeholder = if selected.is_none() {
        r#"<option value="" selected disabled>Choose an option</option>"#
    } else {
        ""
    };

    let mut choices = String::new();
    let mut links = String::new();
    for value in values {
        let href = escape_html(&option_href(view, option.entity_id, value.entity_id));
        let label = escape_html(&value.label);
        let is_selected = selected == Some(value.entity_id);
        choices.push_str(&format!(
            r#"<option value="{value}" data-href="{href}"{selected}>{label}</option>"#,
            value = value.entity_id,
            href = href,
            selected = if is_selected { " selected" } else { "" },
            label = label
        ));
        links.push_str(&format!(r#"<li><a href="{}">{}</a></li>"#, href, label));
    }

    format!(
        r#"<fieldset class="product-option product-option--dropdown" data-option-id="{id}">
    {legend}
    <select name="attribute[{id}]">{placeholder}{choices}</select>
    <noscript><ul class="option-links">{links}</ul></noscript>
</fieldset>
"#,
        id = option.entity_id,
        legend = legend(option),
        placeholder = placeholder,
        choices = choices,
        links = links
    )
}
