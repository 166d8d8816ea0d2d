//! Mathematical utilities for filtering and rounding

/// Neighbourhood filters over intensity arrays
pub mod convolution;
/// Decimal rounding for reported measurements
pub mod rounding;
