//! Random identifier generation for products, transactions, and orders.
//!
//! Identifiers are short uppercase base-36 tokens. Transactions and products
//! use 9 characters, order ids use 7; derived ids (order transactions, receipt
//! line transactions) are prefixed from their parent.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a random uppercase base-36 token of the given length.
#[must_use]
pub fn token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Standard 9-character identifier for products and transactions.
#[must_use]
pub fn new_id() -> String {
    token(9)
}

/// Shorter 7-character identifier for orders and receipts.
#[must_use]
pub fn order_id() -> String {
    token(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let id = token(16);
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_new_id_length() {
        assert_eq!(new_id().len(), 9);
        assert_eq!(order_id().len(), 7);
    }

    #[test]
    fn test_ids_are_not_constant() {
        // Collisions in 100 draws of 36^9 possibilities would indicate a
        // broken generator, not bad luck.
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(new_id());
        }
        assert!(seen.len() > 90);
    }
}
