use bday_core::BirthdayService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: BirthdayService,
}

impl AppState {
    pub fn new(service: BirthdayService) -> Self {
        Self { service }
    }
}
