/// Tag prefixed to every log line emitted by the service.
pub const API_NAME: &str = "[listings-api]";
