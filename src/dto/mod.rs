pub mod health_dto;
pub mod message_dto;

pub use health_dto::HealthResponse;
pub use message_dto::MessageResponse;
