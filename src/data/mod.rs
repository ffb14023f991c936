/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  gtex_qc_demo.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → QcTable (fatal on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  QcTable  │  rows + numeric columns + sorted tissue values
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  tissue subset → row indices (None when subset empty)
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
