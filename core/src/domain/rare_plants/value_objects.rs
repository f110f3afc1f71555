/// Display location assumed when the client sends none. Accepted for
/// display only; it never affects filtering.
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";

#[derive(Debug, Clone)]
pub struct SearchRarePlantsInput {
    pub query: Option<String>,
    pub location: Option<String>,
}
