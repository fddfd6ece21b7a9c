/// Middleware for the API server
///
/// - `security`: security response headers
///
/// Authentication middleware lives in `careerflow_shared::auth::middleware`.

pub mod security;
