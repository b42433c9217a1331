//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP handlers, business logic, data access
//! and infrastructure. The backend uses Axum as the web framework and SeaORM over SQLite
//! for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation and DTO conversion
//! - **Service Layer** (`service/`) - Identity checks and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Extractors** (`extract`) - Body and path extractors that report rejections as `AppError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, service metadata)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts and validates input, converts DTOs to params, calls a service
//! 3. **Service** rejects zero keys, resolves references, calls repositories
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and wraps it in the JSON envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
