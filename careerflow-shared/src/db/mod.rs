/// Database layer
///
/// - `pool`: PostgreSQL connection pool, health check and usage stats
/// - `migrations`: embedded schema migrations and database lifecycle helpers
///
/// Models and their queries live in [`crate::models`].

pub mod migrations;
pub mod pool;
