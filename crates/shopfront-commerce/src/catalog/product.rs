//! Product and product card types.

use serde::{Deserialize, Serialize};

use crate::catalog::{reconcile_default_image, Image, PriceSet, ProductOption};
use crate::ids::{OptionId, ProductId};
use crate::seo::SeoMetadata;

/// Shipping weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

impl Weight {
    /// Display form, e.g. `1.5 lb`.
    pub fn display(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

/// A merchant-defined name/value pair shown in the details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

/// A product as served to the product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub entity_id: ProductId,
    pub name: String,
    /// Storefront path; `/product/{id}` when the catalog has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Rich text HTML, rendered as-is.
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_purchase_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_purchase_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Canonical default image, which may override the flagged one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image: Option<Image>,
    #[serde(default)]
    pub prices: PriceSet,
    #[serde(default)]
    pub product_options: Vec<ProductOption>,
    #[serde(default)]
    pub seo: SeoMetadata,
}

impl Product {
    /// Create a product with only an id and a name.
    pub fn new(entity_id: ProductId, name: impl Into<String>) -> Self {
        Self {
            entity_id,
            name: name.into(),
            path: None,
            brand: None,
            description: String::new(),
            sku: None,
            upc: None,
            min_purchase_quantity: None,
            max_purchase_quantity: None,
            condition: None,
            weight: None,
            custom_fields: Vec::new(),
            images: Vec::new(),
            default_image: None,
            prices: PriceSet::default(),
            product_options: Vec::new(),
            seo: SeoMetadata::default(),
        }
    }

    /// Storefront link to this product.
    pub fn href(&self) -> String {
        product_href(self.entity_id, self.path.as_deref())
    }

    /// Images after reconciling the canonical default.
    pub fn gallery_images(&self) -> Vec<Image> {
        reconcile_default_image(self.images.clone(), self.default_image.as_ref())
    }

    /// Look up an option by id.
    pub fn option(&self, id: OptionId) -> Option<&ProductOption> {
        self.product_options.iter().find(|o| o.entity_id == id)
    }

    /// Whether the details table has anything to show.
    pub fn has_details(&self) -> bool {
        self.sku.is_some()
            || self.upc.is_some()
            || self.condition.is_some()
            || self.weight.is_some()
            || self.min_purchase_quantity.is_some()
            || self.max_purchase_quantity.is_some()
            || !self.custom_fields.is_empty()
    }

    /// Summary card for listings.
    pub fn card(&self) -> ProductCard {
        let images = self.gallery_images();
        ProductCard {
            entity_id: self.entity_id,
            name: self.name.clone(),
            path: self.path.clone(),
            brand: self.brand.clone(),
            image: images.iter().find(|i| i.is_default).or(images.first()).cloned(),
            prices: self.prices.clone(),
        }
    }
}

/// A product summary used by featured and search listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub entity_id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default)]
    pub prices: PriceSet,
}

impl ProductCard {
    /// Storefront link to this product.
    pub fn href(&self) -> String {
        product_href(self.entity_id, self.path.as_deref())
    }
}

fn product_href(id: ProductId, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => format!("/product/{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_href_defaults_to_id_route() {
        let mut product = Product::new(ProductId::new(77), "Lamp");
        assert_eq!(product.href(), "/product/77");

        product.path = Some("/lamps/brass-lamp/".to_string());
        assert_eq!(product.href(), "/lamps/brass-lamp/");
    }

    #[test]
    fn test_gallery_images_reconciled() {
        let mut product = Product::new(ProductId::new(1), "Mug");
        product.images = vec![Image::new("a.jpg", "A").as_default(), Image::new("b.jpg", "B")];
        product.default_image = Some(Image::new("c.jpg", "C"));

        let images = product.gallery_images();
        assert_eq!(images.len(), 3);
        assert_eq!(images.iter().filter(|i| i.is_default).count(), 1);
        assert_eq!(product.card().image.map(|i| i.url), Some("c.jpg".to_string()));
    }

    #[test]
    fn test_card_falls_back_to_first_image() {
        let mut product = Product::new(ProductId::new(1), "Mug");
        product.images = vec![Image::new("a.jpg", "A"), Image::new("b.jpg", "B")];
        product.prices.price = Some(Money::usd(1200));

        let card = product.card();
        assert_eq!(card.image.map(|i| i.url), Some("a.jpg".to_string()));
        assert_eq!(card.prices.price, Some(Money::usd(1200)));
    }

    #[test]
    fn test_has_details() {
        let mut product = Product::new(ProductId::new(1), "Mug");
        assert!(!product.has_details());
        product.custom_fields.push(CustomField {
            name: "Material".into(),
            value: "Stoneware".into(),
        });
        assert!(product.has_details());
    }

    #[test]
    fn test_minimal_wire_product() {
        let product: Product =
            serde_json::from_str(r#"{"entityId": 9, "name": "Plain"}"#).unwrap();
        assert_eq!(product.entity_id, ProductId::new(9));
        assert!(product.images.is_empty());
        assert!(product.prices.resolve().is_none());
        assert_eq!(product.seo.page_title, "");
    }

    #[test]
    fn test_weight_display() {
        let weight = Weight {
            value: 1.5,
            unit: "lb".into(),
        };
        assert_eq!(weight.display(), "1.5 lb");
    }
}
