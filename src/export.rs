//! CSV exports for the inventory, transaction, and order screens.
//!
//! The three exports are intentionally not uniform: the orders export quotes
//! every field (doubling internal quotes), while the inventory and
//! transaction exports join raw values unquoted. That asymmetry matches the
//! screens these were lifted from and is kept as-is; normalizing it would
//! silently change the files downstream consumers already parse.

use crate::state::{Order, Product, Transaction};

/// Renders the inventory export: unquoted, comma-joined rows.
#[must_use]
pub fn export_inventory(products: &[Product]) -> String {
    let mut lines = vec!["ID,Name,Category,Price,Stock,Min Stock,Last Updated".to_string()];
    for p in products {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            p.id,
            p.name,
            p.category,
            p.price,
            p.stock,
            p.min_stock,
            p.last_updated.to_rfc3339()
        ));
    }
    lines.join("\n")
}

/// Renders the transaction export: unquoted, comma-joined rows. Absent totals
/// are exported as `0`.
#[must_use]
pub fn export_transactions(transactions: &[Transaction]) -> String {
    let mut lines = vec!["TX ID,Timestamp,Product,User,Type,Quantity,Value".to_string()];
    for t in transactions {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            t.id,
            t.timestamp.to_rfc3339(),
            t.product_name,
            t.user_name,
            t.kind.as_str(),
            t.amount,
            t.total_price.unwrap_or(0.0)
        ));
    }
    lines.join("\n")
}

/// Renders the orders export: every field quoted, internal quotes doubled.
#[must_use]
pub fn export_orders(orders: &[Order]) -> String {
    let header = ["Order ID", "Product", "Quantity", "Status", "Reason", "Requested By", "Time"];
    let mut lines = vec![header.join(",")];
    for o in orders {
        let fields = [
            o.id.clone(),
            o.product_name.clone(),
            o.quantity.to_string(),
            o.status.as_str().to_string(),
            o.notes.clone().unwrap_or_default(),
            o.requested_by.clone(),
            o.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        ];
        let quoted: Vec<String> = fields
            .iter()
            .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
            .collect();
        lines.push(quoted.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::state::{OrderStatus, TransactionKind};
    use crate::test_utils::test_product;
    use chrono::Utc;

    #[test]
    fn test_export_inventory_header_and_rows() {
        let products = vec![test_product("P1", "Widget", 2.0, 10)];
        let out = export_inventory(&products);
        let mut lines = out.lines();

        assert_eq!(
            lines.next().unwrap(),
            "ID,Name,Category,Price,Stock,Min Stock,Last Updated"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("P1,Widget,General,2,10,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_transactions_missing_total_is_zero() {
        let tx = Transaction {
            id: "T1".to_string(),
            product_id: "P1".to_string(),
            product_name: "Widget".to_string(),
            kind: TransactionKind::Addition,
            amount: 3,
            user_name: "alice".to_string(),
            timestamp: Utc::now(),
            total_price: None,
        };
        let out = export_transactions(&[tx]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.ends_with(",addition,3,0"));
    }

    #[test]
    fn test_export_orders_quotes_every_field() {
        let order = Order {
            id: "O1".to_string(),
            product_id: "P1".to_string(),
            product_name: "Widget \"Pro\"".to_string(),
            quantity: 2,
            requested_by: "alice".to_string(),
            status: OrderStatus::Rejected,
            timestamp: Utc::now(),
            notes: Some("Insufficient stock: short by 1 unit(s)".to_string()),
        };
        let out = export_orders(&[order]);
        let row = out.lines().nth(1).unwrap();

        assert!(row.starts_with("\"O1\",\"Widget \"\"Pro\"\"\",\"2\",\"rejected\""));
        assert!(row.contains("\"Insufficient stock: short by 1 unit(s)\""));
    }

    #[test]
    fn test_export_orders_empty_notes_render_as_empty_field() {
        let order = Order {
            id: "O2".to_string(),
            product_id: "P1".to_string(),
            product_name: "Widget".to_string(),
            quantity: 1,
            requested_by: "bob".to_string(),
            status: OrderStatus::Fulfilled,
            timestamp: Utc::now(),
            notes: None,
        };
        let out = export_orders(&[order]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("\"fulfilled\",\"\",\"bob\""));
    }
}
