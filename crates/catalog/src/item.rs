use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use url::Url;

use bazaar_core::{DomainResult, ValidationReport};

/// Prices are amounts in the smallest currency unit. A charge must exceed
/// one unit of the major currency and supports up to eight digits.
pub const MIN_PRICE_EXCLUSIVE: i64 = 100;
pub const MAX_PRICE: i64 = 99_999_999;

/// A named image attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub url: String,
}

impl Image {
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.name.trim().is_empty() {
            report.reject("name", "must not be empty");
        }
        match Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => report.reject("url", "must be an absolute http(s) URL"),
        }
        report
    }
}

/// A sellable item.
///
/// `tags` is a set: duplicates in the request body collapse silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

impl Item {
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.name.trim().is_empty() {
            report.reject("name", "must not be empty");
        }
        check_price(&mut report, "price", self.price);
        if let Some(images) = &self.images {
            for (i, image) in images.iter().enumerate() {
                report.nest(&format!("images[{i}]"), image.check());
            }
        }
        report
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.check().into_result()
    }

    /// Gross price, only meaningful when the item carries a tax amount.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.map(|tax| self.price as f64 + tax)
    }

    /// Copy of this item with the patch's provided fields applied.
    pub fn merged(&self, patch: ItemPatch) -> Item {
        Item {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
            tax: patch.tax.or(self.tax),
            tags: patch.tags.unwrap_or_else(|| self.tags.clone()),
            images: patch.images.or_else(|| self.images.clone()),
        }
    }
}

fn check_price(report: &mut ValidationReport, field: &str, price: i64) {
    if price <= MIN_PRICE_EXCLUSIVE {
        report.reject(field, format!("must be greater than {MIN_PRICE_EXCLUSIVE}"));
    } else if price > MAX_PRICE {
        report.reject(field, format!("must not exceed {MAX_PRICE}"));
    }
}

/// Partial update of a stored item. Absent fields leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub tax: Option<f64>,
    pub tags: Option<BTreeSet<String>>,
    pub images: Option<Vec<Image>>,
}

impl ItemPatch {
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                report.reject("name", "must not be empty");
            }
        }
        if let Some(price) = self.price {
            check_price(&mut report, "price", price);
        }
        if let Some(images) = &self.images {
            for (i, image) in images.iter().enumerate() {
                report.nest(&format!("images[{i}]"), image.check());
            }
        }
        report
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.check().into_result()
    }
}

/// Presentation options accompanying an item update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemOptions {
    /// Amount subtracted from the base price (same unit as `Item::price`).
    pub promotion: i64,
    pub hidden: bool,
    pub shipping_available: bool,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            promotion: 0,
            hidden: false,
            shipping_available: true,
        }
    }
}

impl ItemOptions {
    /// Options are only valid relative to the item they apply to.
    pub fn check_for(&self, item: &Item) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.promotion < 0 {
            report.reject("options.promotion", "must not be negative");
        } else if self.promotion > item.price {
            report.reject("options.promotion", "must not exceed the item price");
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(price: i64) -> Item {
        Item {
            name: "keyboard".to_string(),
            description: Some("A very nice keyboard.".to_string()),
            price,
            tax: Some(0.2),
            tags: BTreeSet::new(),
            images: None,
        }
    }

    #[test]
    fn item_with_valid_price_passes() {
        assert!(test_item(7900).validate().is_ok());
    }

    #[test]
    fn item_price_at_lower_bound_is_rejected() {
        let err = test_item(100).validate().unwrap_err();
        match err {
            bazaar_core::DomainError::Validation(report) => {
                assert_eq!(report.issues()[0].field, "price");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn item_price_above_upper_bound_is_rejected() {
        assert!(test_item(100_000_000).validate().is_err());
        assert!(test_item(MAX_PRICE).validate().is_ok());
    }

    #[test]
    fn bad_image_url_is_reported_under_its_index() {
        let mut item = test_item(7900);
        item.images = Some(vec![
            Image {
                name: "Front view".to_string(),
                url: "https://via.placeholder.com/640x360".to_string(),
            },
            Image {
                name: "Switch".to_string(),
                url: "not a url".to_string(),
            },
        ]);

        let report = item.check();
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].field, "images[1].url");
    }

    #[test]
    fn price_with_tax_requires_tax() {
        let mut item = test_item(7900);
        assert_eq!(item.price_with_tax(), Some(7900.2));
        item.tax = None;
        assert_eq!(item.price_with_tax(), None);
    }

    #[test]
    fn merged_keeps_unpatched_fields() {
        let stored = test_item(6200);
        let patch = ItemPatch {
            price: Some(9000),
            ..ItemPatch::default()
        };

        let updated = stored.merged(patch);
        assert_eq!(updated.price, 9000);
        assert_eq!(updated.name, "keyboard");
        assert_eq!(updated.tax, Some(0.2));
    }

    #[test]
    fn patch_price_obeys_item_bounds() {
        let patch = ItemPatch {
            price: Some(50),
            ..ItemPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn duplicate_tags_collapse_on_deserialize() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "name": "keyboard",
            "price": 7900,
            "tags": ["rgb", "mechanical", "rgb"],
        }))
        .unwrap();
        assert_eq!(item.tags.len(), 2);
    }

    #[test]
    fn promotion_larger_than_price_is_rejected() {
        let item = test_item(7900);
        let options = ItemOptions {
            promotion: 8000,
            ..ItemOptions::default()
        };
        assert!(!options.check_for(&item).is_empty());
        let options = ItemOptions {
            promotion: 200,
            ..ItemOptions::default()
        };
        assert!(options.check_for(&item).is_empty());
    }
}
