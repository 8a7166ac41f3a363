pub mod health_service;
pub mod mailer;
pub mod relay_service;
