//! Catalog seeding from the bundled inventory CSV.
//!
//! The seed file has columns `article, quantity, price, date` with a header
//! row. The numeric columns come from a spreadsheet export and need cleanup:
//! comma decimal separators, en-dash price ranges ("14,90 – 19,90"), and stray
//! unit text. Category and SKU are not in the file at all; both are derived
//! from the article name.

use crate::{
    core::ids,
    errors::Result,
    state::Product,
};
use tracing::debug;

/// The inventory seed shipped with the build.
pub const BUNDLED_SEED: &str = include_str!("../data/seed_inventory.csv");

/// Minimum-stock threshold assigned to every seeded product.
const SEED_MIN_STOCK: u32 = 5;

/// Keyword sets mapped to fixed category labels. Matching is a
/// case-insensitive substring check against the article name, first hit wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Electronics",
        &[
            "laptop", "notebook", "monitor", "tablet", "phone", "drucker", "printer", "beamer",
            "projector", "webcam", "docking", "server", "kamera", "camera",
        ],
    ),
    (
        "Accessories",
        &[
            "kabel", "cable", "adapter", "maus", "mouse", "tastatur", "keyboard", "headset",
            "kopfhörer", "ladegerät", "charger", "hülle", "case",
        ],
    ),
    (
        "Home",
        &[
            "tisch", "desk", "stuhl", "chair", "lampe", "lamp", "regal", "shelf", "schrank",
            "kocher",
        ],
    ),
    ("Food", &["kaffee", "coffee", "tee ", "snack", "bohnen"]),
    ("Beauty", &["creme", "seife", "soap", "shampoo"]),
    ("Clothing", &["shirt", "hose", "jacke", "jacket", "pullover"]),
];

/// Fallback category when no keyword set matches.
const FALLBACK_CATEGORY: &str = "General";

/// Parses the seed CSV into catalog entries.
///
/// Row identifiers are the 1-based row index, which keeps re-seeding stable
/// across migrations. Rows with an empty article name are skipped. Unparseable
/// quantities and prices default to 0 rather than failing the whole seed.
///
/// # Errors
/// Returns an error only if the CSV itself is malformed beyond what the
/// reader tolerates.
pub fn parse_seed_csv(input: &str) -> Result<Vec<Product>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let now = chrono::Utc::now();
    let mut products = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let name = record.get(0).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        let stock = parse_quantity(record.get(1).unwrap_or(""));
        let price = parse_price(record.get(2).unwrap_or(""));

        products.push(Product {
            id: (index + 1).to_string(),
            sku: derive_sku(name),
            name: name.to_string(),
            category: infer_category(name).to_string(),
            price,
            stock,
            min_stock: SEED_MIN_STOCK,
            description: String::new(),
            image_url: None,
            last_updated: now,
        });
    }

    debug!(rows = products.len(), "parsed seed inventory");
    Ok(products)
}

/// Infers a category label by keyword matching against the article name.
#[must_use]
pub fn infer_category(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    for (label, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return label;
        }
    }
    FALLBACK_CATEGORY
}

/// Derives a SKU from an article name: uppercase, non-alphanumeric runs
/// collapsed to single hyphens, trimmed, truncated to 18 characters. Names
/// that yield nothing get a random suffix instead.
#[must_use]
pub fn derive_sku(name: &str) -> String {
    let mut sku = String::new();
    let mut pending_hyphen = false;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !sku.is_empty() {
                sku.push('-');
            }
            pending_hyphen = false;
            sku.push(c.to_ascii_uppercase());
        } else {
            pending_hyphen = true;
        }
    }

    let truncated: String = sku.chars().take(18).collect();
    let trimmed = truncated.trim_matches('-');
    if trimmed.is_empty() {
        format!("SKU-{}", ids::token(6))
    } else {
        trimmed.to_string()
    }
}

/// Reduces a raw numeric cell to a parseable decimal string: the first
/// component of an en-dash range, comma decimal separators turned into dots,
/// everything that is not a digit or dot stripped.
fn normalize_number(raw: &str) -> String {
    let first = raw.split('\u{2013}').next().unwrap_or("");
    first
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parses a quantity cell; fractional values truncate, failures become 0.
fn parse_quantity(raw: &str) -> u32 {
    // Cast safety: seed quantities are small positive counts; truncation of
    // any fractional remainder is the intended behavior.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = normalize_number(raw).parse::<f64>().unwrap_or(0.0).max(0.0) as u32;
    value
}

/// Parses a price cell; failures become 0.
fn parse_price(raw: &str) -> f64 {
    normalize_number(raw).parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_price_comma_decimal() {
        assert_eq!(parse_price("9,90"), 9.9);
        assert_eq!(parse_price("899.00"), 899.0);
    }

    #[test]
    fn test_parse_price_en_dash_range_takes_first() {
        assert_eq!(parse_price("14,90 \u{2013} 19,90"), 14.9);
    }

    #[test]
    fn test_parse_price_strips_unit_text() {
        assert_eq!(parse_price("12,50 EUR"), 12.5);
        assert_eq!(parse_price("7 Stk"), 7.0);
    }

    #[test]
    fn test_parse_price_garbage_defaults_to_zero() {
        assert_eq!(parse_price("n/a"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("120"), 120);
        assert_eq!(parse_quantity("1,5"), 1);
        assert_eq!(parse_quantity("unbekannt"), 0);
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category("Laptop Dell Latitude 5440"), "Electronics");
        assert_eq!(infer_category("USB-C Kabel 2m"), "Accessories");
        assert_eq!(infer_category("Schreibtischlampe LED"), "Home");
        assert_eq!(infer_category("Kaffee Bohnen 1kg"), "Food");
        assert_eq!(infer_category("Handcreme Lavendel"), "Beauty");
        assert_eq!(infer_category("Notizbuch A5"), "General");
    }

    #[test]
    fn test_derive_sku() {
        assert_eq!(derive_sku("USB-C Kabel 2m"), "USB-C-KABEL-2M");
        assert_eq!(derive_sku("Laptop Dell Latitude 5440"), "LAPTOP-DELL-LATITU");
        assert_eq!(derive_sku("  Maus  "), "MAUS");
    }

    #[test]
    fn test_derive_sku_truncates_to_18() {
        let sku = derive_sku("A very long product name indeed");
        assert!(sku.len() <= 18);
        assert!(!sku.ends_with('-'));
    }

    #[test]
    fn test_derive_sku_empty_name_gets_random_suffix() {
        let sku = derive_sku("***");
        assert!(sku.starts_with("SKU-"));
        assert_eq!(sku.len(), 10);
    }

    #[test]
    fn test_parse_bundled_seed() {
        let products = parse_seed_csv(BUNDLED_SEED).unwrap();
        assert!(products.len() >= 15);

        let laptop = products
            .iter()
            .find(|p| p.name == "Laptop Dell Latitude 5440")
            .unwrap();
        assert_eq!(laptop.id, "1");
        assert_eq!(laptop.stock, 12);
        assert_eq!(laptop.price, 899.0);
        assert_eq!(laptop.category, "Electronics");

        let adapter = products.iter().find(|p| p.name == "HDMI Adapter").unwrap();
        // Range price resolves to the first component
        assert_eq!(adapter.price, 14.9);

        let cable = products.iter().find(|p| p.name == "USB-C Kabel 2m").unwrap();
        assert_eq!(cable.price, 9.9);
        assert_eq!(cable.stock, 120);
    }

    #[test]
    fn test_seed_parsing_is_idempotent() {
        let first = parse_seed_csv(BUNDLED_SEED).unwrap();
        let second = parse_seed_csv(BUNDLED_SEED).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.sku, b.sku);
            assert_eq!(a.name, b.name);
            assert_eq!(a.category, b.category);
            assert_eq!(a.price, b.price);
            assert_eq!(a.stock, b.stock);
        }
    }

    #[test]
    fn test_rows_with_empty_article_are_skipped() {
        let csv = "article,quantity,price,date\n,5,1.00,2024-01-01\nMaus,2,3,2024-01-01\n";
        let products = parse_seed_csv(csv).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Maus");
    }
}
