use std::sync::Arc;

use pressroom_infra::DocumentStore;
use pressroom_lineage::TimelineService;

/// Services shared across request handlers.
pub struct AppServices {
    pub timeline: TimelineService,
}

pub fn build_services(store: Arc<dyn DocumentStore>) -> AppServices {
    AppServices {
        timeline: TimelineService::new(store),
    }
}
