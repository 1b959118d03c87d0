/// Chart derivation: axis heuristics, aggregation, and option building.
///
/// ```text
///   ColumnClasses ──▶ axes ──▶ aggregate ──▶ options ──▶ renderer
/// ```
///
/// Each stage is a pure function of its inputs; the whole pipeline is
/// re-run from scratch on every dataset, axis or variant change.
pub mod aggregate;
pub mod axes;
pub mod options;
