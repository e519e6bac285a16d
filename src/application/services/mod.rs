/// Animal taxonomy and search accessors
pub mod animal_service;
/// Chat-completion collaborator
pub mod chat;
/// Free-text adoption match orchestrator
pub mod match_service;
/// Organization accessors
pub mod organization_service;
/// Page-stitching helper shared by the paginated accessors
pub mod pagination;

pub use animal_service::{AnimalService, AnimalServiceImpl};
pub use chat::{ChatClient, OpenAiChatClient};
pub use match_service::DogMatcher;
pub use organization_service::{OrganizationService, OrganizationServiceImpl};
