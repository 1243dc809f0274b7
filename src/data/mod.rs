/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///     .csv upload
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  decode bytes → TransactionSet (all-or-nothing)
///    └──────────┘
///         │
///         ▼
///    ┌────────────────┐
///    │ TransactionSet  │  Vec<Transaction>, category list, date span
///    └────────────────┘
///         │
///         ▼
///    ┌──────────┐
///    │  filter   │  date/category/amount predicates → visible indices
///    └──────────┘
///         │
///         ▼
///    ┌──────────┐
///    │ summary   │  bar groups, pie shares, total/mean
///    └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
