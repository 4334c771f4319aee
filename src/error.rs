//! Error conditions raised by table construction and bounded insertion.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table capacity must be positive")]
    ZeroCapacity,

    #[error("table capacity {requested} exceeds the maximum of {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    /// No empty or matching slot is reachable by the quadratic probe
    /// sequence starting at `home`.
    #[error("table saturated: no free slot reachable from home index {home} after {attempts} probes")]
    Saturated { home: usize, attempts: usize },
}
