//! Content pages and the contact form.

use std::fmt;

use serde::{Deserialize, Serialize};
use shopfront_core::QueryParams;

use crate::ids::PageId;
use crate::seo::SeoMetadata;

/// Form field carrying the reCAPTCHA response token.
pub const CAPTCHA_FIELD: &str = "g-recaptcha-response";

/// Optional contact form fields a contact page can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    CompanyName,
    Phone,
    OrderNumber,
    RmaNumber,
}

impl ContactField {
    /// Wire key, also used as the form input name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::CompanyName => "companyName",
            Self::Phone => "phone",
            Self::OrderNumber => "orderNumber",
            Self::RmaNumber => "rmaNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::CompanyName => "Company name",
            Self::Phone => "Phone number",
            Self::OrderNumber => "Order number",
            Self::RmaNumber => "RMA number",
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Phone => "tel",
            _ => "text",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fullName" => Some(Self::FullName),
            "companyName" => Some(Self::CompanyName),
            "phone" => Some(Self::Phone),
            "orderNumber" => Some(Self::OrderNumber),
            "rmaNumber" => Some(Self::RmaNumber),
            _ => None,
        }
    }
}

/// Page type, the only thing content rendering dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPageKind {
    /// A generic content page; also every page type the storefront does
    /// not know.
    Normal,
    /// A contact page with its declared optional fields.
    Contact { contact_fields: Vec<ContactField> },
}

/// A content page resolved by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WebPageWire", into = "WebPageWire")]
pub struct WebPage {
    pub entity_id: PageId,
    pub name: String,
    pub path: String,
    /// Rich text HTML, rendered as-is.
    pub html_body: String,
    pub seo: SeoMetadata,
    pub kind: WebPageKind,
}

impl WebPage {
    pub fn is_contact(&self) -> bool {
        matches!(self.kind, WebPageKind::Contact { .. })
    }

    /// Declared contact fields, empty for normal pages.
    pub fn contact_fields(&self) -> &[ContactField] {
        match &self.kind {
            WebPageKind::Contact { contact_fields } => contact_fields,
            WebPageKind::Normal => &[],
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebPageWire {
    entity_id: PageId,
    name: String,
    path: String,
    #[serde(default)]
    html_body: String,
    #[serde(default)]
    seo: SeoMetadata,
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contact_fields: Vec<String>,
}

impl From<WebPageWire> for WebPage {
    fn from(wire: WebPageWire) -> Self {
        let kind = match wire.page_type.as_str() {
            "ContactPage" => WebPageKind::Contact {
                contact_fields: wire
                    .contact_fields
                    .iter()
                    .filter_map(|key| ContactField::from_key(key))
                    .collect(),
            },
            _ => WebPageKind::Normal,
        };

        Self {
            entity_id: wire.entity_id,
            name: wire.name,
            path: wire.path,
            html_body: wire.html_body,
            seo: wire.seo,
            kind,
        }
    }
}

impl From<WebPage> for WebPageWire {
    fn from(page: WebPage) -> Self {
        let (page_type, contact_fields) = match page.kind {
            WebPageKind::Contact { contact_fields } => (
                "ContactPage",
                contact_fields.iter().map(|f| f.key().to_string()).collect(),
            ),
            WebPageKind::Normal => ("NormalPage", Vec::new()),
        };

        Self {
            entity_id: page.entity_id,
            name: page.name,
            path: page.path,
            html_body: page.html_body,
            seo: page.seo,
            page_type: page_type.to_string(),
            contact_fields,
        }
    }
}

/// Bot verification settings for forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotVerification {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_key: Option<String>,
}

impl BotVerification {
    /// Site key for the reCAPTCHA widget, when verification is on.
    pub fn widget_site_key(&self) -> Option<&str> {
        self.site_key
            .as_deref()
            .filter(|key| self.is_enabled && !key.is_empty())
    }
}

/// A rejected contact form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A validated contact form submission, posted to the commerce API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub email: String,
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rma_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_token: Option<String>,
}

impl ContactSubmission {
    /// Validate a posted form. Only declared optional fields are read.
    pub fn from_form(form: &QueryParams, declared: &[ContactField]) -> Result<Self, Vec<FieldError>> {
        let text = |key: &str| {
            form.get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let declared_text = |field: ContactField| {
            if declared.contains(&field) {
                text(field.key())
            } else {
                None
            }
        };

        let mut errors = Vec::new();
        let email = text("email").unwrap_or_default();
        if !email.contains('@') {
            errors.push(FieldError {
                field: "email",
                message: "Enter a valid email address.",
            });
        }
        let comments = text("comments").unwrap_or_default();
        if comments.is_empty() {
            errors.push(FieldError {
                field: "comments",
                message: "Comments are required.",
            });
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            email,
            comments,
            full_name: declared_text(ContactField::FullName),
            company_name: declared_text(ContactField::CompanyName),
            phone: declared_text(ContactField::Phone),
            order_number: declared_text(ContactField::OrderNumber),
            rma_number: declared_text(ContactField::RmaNumber),
            captcha_token: text(CAPTCHA_FIELD),
        })
    }
}
