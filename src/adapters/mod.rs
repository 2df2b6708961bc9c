// Adapters layer: concrete implementations of the domain ports.

#[cfg(feature = "plot")]
pub mod chart;
