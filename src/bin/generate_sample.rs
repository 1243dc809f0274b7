//! Writes a deterministic demo CSV (`sample_sales.csv`) for trying out the
//! dashboard without real data.

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Minimal deterministic PRNG (64-bit LCG, MMIX constants).
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() >> 33) as usize % items.len()]
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64)
    }
}

/// (category, products with price ranges)
const CATALOG: &[(&str, &[(&str, f64, f64)])] = &[
    (
        "Food",
        &[
            ("Bread", 40.0, 120.0),
            ("Milk", 50.0, 90.0),
            ("Cheese", 200.0, 600.0),
        ],
    ),
    (
        "Tools",
        &[
            ("Hammer", 300.0, 900.0),
            ("Screwdriver", 150.0, 400.0),
            ("Drill", 2000.0, 6000.0),
        ],
    ),
    ("Books", &[("Atlas", 500.0, 1500.0), ("Novel", 250.0, 700.0)]),
    ("Toys", &[("Puzzle", 300.0, 800.0), ("Kite", 150.0, 450.0)]),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;

    let path = "sample_sales.csv";
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(["Date", "Category", "Product", "Amount"])?;

    let mut rows = 0usize;
    for day in 0..180u64 {
        let date = start + chrono::Days::new(day);
        let sales_today = 1 + (rng.next_u64() % 4) as usize;

        for _ in 0..sales_today {
            let (category, products) = *rng.pick(CATALOG);
            let (product, lo, hi) = *rng.pick(products);
            let amount = rng.range(lo, hi);

            writer.write_record([
                date.format("%Y-%m-%d").to_string(),
                category.to_string(),
                product.to_string(),
                format!("{amount:.2}"),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {rows} transactions to {path}");
    Ok(())
}
