/// Network adapters for the Dependency-Track REST API
mod dependency_track_client;
mod dependency_track_repository;

pub use dependency_track_client::DependencyTrackClient;
pub use dependency_track_repository::DependencyTrackRepository;
