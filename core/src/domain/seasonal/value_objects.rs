use crate::domain::seasonal::entities::Season;

#[derive(Debug, Clone)]
pub struct GetSeasonalCareInput {
    /// Season to look up; `None` resolves to the current calendar season.
    pub season: Option<Season>,
}
