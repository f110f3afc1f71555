#[derive(Debug, Clone)]
pub struct CheckCompatibilityInput {
    /// Companion name filter; `None` returns the full comparison set.
    pub plant: Option<String>,
}
