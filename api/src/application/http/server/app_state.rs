use std::sync::Arc;

use floralens_core::application::FloraLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<FloraLensService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FloraLensService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
