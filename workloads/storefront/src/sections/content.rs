//! Content page and contact form renderers.

use shopfront_commerce::content::CAPTCHA_FIELD;
use shopfront_commerce::prelude::*;
use shopfront_core::QueryParams;
use shopfront_streaming::escape_html;

use crate::page::{ContentView, FormState};

/// Render the page title and rich text body.
pub fn render_content_body(page: &WebPage) -> String {
    format!(
        r#"<article class="content-page" data-section="content">
    <h1>{name}</h1>
    <div class="rich-text">{body}</div>
</article>"#,
        name = escape_html(&page.name),
        body = page.html_body
    )
}

/// Render the contact form, or the confirmation once submitted.
pub fn render_contact_form(view: &ContentView) -> String {
    let (errors, values) = match &view.form {
        FormState::Submitted => {
            return r#"<section class="contact-form" data-section="contact-form">
    <div class="form-success" role="status">Thanks for reaching out. We will get back to you soon.</div>
</section>"#
                .to_string();
        }
        FormState::Invalid { errors, values } => (errors.as_slice(), values.clone()),
        FormState::Blank => (&[][..], QueryParams::new()),
    };

    let error_for = |field: &str| {
        errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| format!(r#"<span class="field-error">{}</span>"#, escape_html(error.message)))
            .unwrap_or_default()
    };
    let value_of = |field: &str| escape_html(values.get(field).unwrap_or_default());

    let summary = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|error| format!("<li>{}</li>", escape_html(error.message)))
            .collect();
        format!(r#"<ul class="form-errors" role="alert">{}</ul>"#, items)
    };

    let optional_fields: String = view
        .page
        .contact_fields()
        .iter()
        .map(|field| {
            format!(
                r#"<label class="form-field">
        <span>{label}</span>
        <input type="{input_type}" name="{key}" value="{value}">
        {error}
    </label>"#,
                label = field.label(),
                input_type = field.input_type(),
                key = field.key(),
                value = value_of(field.key()),
                error = error_for(field.key())
            )
        })
        .collect();

    let captcha = match view.verification.as_ref().and_then(BotVerification::widget_site_key) {
        Some(site_key) => format!(
            r#"<div class="g-recaptcha" data-sitekey="{}"></div>
    {}
    <script src="https://www.google.com/recaptcha/api.js" async defer></script>"#,
            escape_html(site_key),
            error_for(CAPTCHA_FIELD)
        ),
        None => String::new(),
    };

    format!(
        r#"<section class="contact-form" data-section="contact-form">
    {summary}
    <form method="post" action="{action}">
    <label class="form-field">
        <span>Email</span>
        <input type="email" name="email" value="{email}" required>
        {email_error}
    </label>
    {optional_fields}
    <label class="form-field">
        <span>Comments</span>
        <textarea name="comments" rows="6" required>{comments}</textarea>
        {comments_error}
    </label>
    {captcha}
    <button type="submit" class="button">Submit form</button>
    </form>
</section>"#,
        summary = summary,
        action = escape_html(&view.page.path),
        email = value_of("email"),
        email_error = error_for("email"),
        optional_fields = optional_fields,
        comments = value_of("comments"),
        comments_error = error_for("comments"),
        captcha = captcha
    )
}
