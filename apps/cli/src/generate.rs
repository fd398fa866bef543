//! Random basket generation for the `random` CLI mode.
//!
//! Produces plausible basket text in the same grammar the parser accepts:
//! quantities 1-10, a 30% chance of the imported prefix, names drawn from
//! the book/food/medical/other pools, prices between 5.00 and 50.00 with
//! exactly two decimals.

use rand::Rng;

const BOOKS: &[&str] = &["book", "novel", "magazine"];
const FOOD: &[&str] = &["chocolate bar", "box of chocolates", "bag of rice"];
const MEDICAL: &[&str] = &["headache pills", "band-aid", "bottle of medicine"];
const OTHERS: &[&str] = &["perfume", "music CD", "lamp", "watch"];

const POOLS: &[&[&str]] = &[BOOKS, FOOD, MEDICAL, OTHERS];

/// Generates a random basket of 1-10 lines.
pub fn random_basket(rng: &mut impl Rng) -> String {
    let count = rng.gen_range(1..=10);
    (0..count)
        .map(|_| random_line(rng))
        .collect::<Vec<_>>()
        .join("\n")
}

fn random_line(rng: &mut impl Rng) -> String {
    let quantity = rng.gen_range(1..=10);
    let imported = if rng.gen_bool(0.3) { "imported " } else { "" };
    let pool = POOLS[rng.gen_range(0..POOLS.len())];
    let name = pool[rng.gen_range(0..pool.len())];
    // 5.00 ..= 50.00, always two decimals
    let cents = rng.gen_range(500..=5000);
    format!(
        "{quantity} {imported}{name} at {}.{:02}",
        cents / 100,
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tally_core::parser::ReceiptParser;

    #[test]
    fn test_generated_baskets_always_parse_strictly() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let basket = random_basket(&mut rng);
            let receipt = ReceiptParser::parse_strict(Some(&basket)).unwrap();
            assert!(!receipt.line_items().is_empty());
            assert!(receipt.total_price().is_positive());
        }
    }
}
