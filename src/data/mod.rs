/// Data layer: core types, ingestion, classification, and filtering.
///
/// Architecture:
/// ```text
///  json / csv text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, schema from the first record
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  schema   │      │  filter   │
///   └──────────┘      └──────────┘
///    column classes    search + visibility
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
