pub mod file_settings;
pub mod memory;
pub mod settings_service;

pub use file_settings::FileSettingsRepository;
pub use memory::{
    InMemoryOperationCountRepository, InMemorySessionStore, InMemorySettingsRepository,
};
pub use settings_service::SettingsService;
