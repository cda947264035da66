//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. Logins go
//! through an external OAuth2 identity provider and payments through a card processor,
//! both of which also call back in through signed webhooks.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions between controllers and data layer
//! - **Data Layer** (`data/`) - Repositories over the SeaORM entities
//! - **Model Layer** (`model/`) - Aggregates, operation parameters and pure domain rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP and OAuth clients, payment gateway)
//! - **Startup** (`startup`) - Initialization of tracing, database, sessions, and clients
//! - **Router** (`router`) - Axum route table and OpenAPI document
//! - **Scheduler** (`scheduler/`) - Cron jobs, such as opening completions for ended rentals
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** resolves the caller through `AuthGuard` and calls a service
//! 3. **Service** checks ownership and state, then reads or writes through repositories
//! 4. **Controller** converts the result to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
