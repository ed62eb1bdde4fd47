pub mod athletes;
pub mod events;
pub mod models;
pub mod performances;
pub mod status;

pub use athletes::AthletesApi;
pub use events::EventsApi;
pub use performances::PerformancesApi;
pub use status::StatusApi;
