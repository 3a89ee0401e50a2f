/// Use cases module containing application business logic orchestration
mod migrate_dependencies;

pub use migrate_dependencies::MigrateDependenciesUseCase;
