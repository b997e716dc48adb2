//! Data layer: core types and loading.
//!
//! Architecture:
//! ```text
//!  array.txt / vector.txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse whitespace table → TimingDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ TimingDataset │  Vec<MeasurementRow>, label, source path
//!   └───────────────┘
//! ```

pub mod loader;
pub mod model;
