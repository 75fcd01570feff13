/// Client facade bundling the resource clients
pub mod client;
/// Application configuration module
pub mod config;
/// Shared bearer credential
pub mod credential;
/// Resource service interfaces
pub mod interfaces;
/// Shared request plumbing for resource services
pub mod resource;
/// Resource service implementations
pub mod services;
