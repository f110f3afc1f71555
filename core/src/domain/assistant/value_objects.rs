#[derive(Debug, Clone)]
pub struct AskAssistantInput {
    pub question: String,
    pub plant_name: Option<String>,
}
