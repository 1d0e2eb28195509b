//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire the seeded store, the service and the response envelopes together.
//! - Print deterministic JSON so core linkage can be checked without an RPC host.

use userstore_core::{
    init_logging, ApiResponse, HealthCheckResponse, InMemoryUserRepository, LoggingConfig,
    UserService,
};

fn main() {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("userstore_core ping={}", userstore_core::ping());
    println!("userstore_core version={}", userstore_core::core_version());

    let service = UserService::new(InMemoryUserRepository::seeded());
    let created = service.create_user("New", "new@example.com");

    print_json(&HealthCheckResponse::new("cli"));
    print_json(&ApiResponse::success_with_message(created, "User created"));
    print_json(&ApiResponse::success(service.list_users(None, None)));
    print_json(&ApiResponse::from_lookup(
        service.get_user_by_email("ALEN@EXAMPLE.COM"),
        "User not found",
    ));
    print_json(&ApiResponse::success(service.count_users()));
}

fn print_json<T: serde::Serialize>(value: &T) {
    match render_json(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{err}"),
    }
}

// No logger is installed unless USERSTORE_LOG_DIR is set, so failures go to stderr.
fn render_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("failed to serialize output: {err}"))
}
