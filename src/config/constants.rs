//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database host (for local development)
pub const DEFAULT_DB_HOST: &str = "127.0.0.1";

/// Default database port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database password (local development only)
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "boolean";
