//! HTTP request handlers, one module per endpoint.

pub mod redirect;
pub mod shorten;
pub mod stats;

pub use redirect::{redirect_handler, shorten_path_redirect_handler};
pub use shorten::shorten_handler;
pub use stats::stats_handler;

#[cfg(test)]
fn test_server(
    repository: crate::domain::repositories::MockShortcodeRepository,
) -> axum_test::TestServer {
    let state = crate::state::AppState::new(std::sync::Arc::new(repository));
    let app = crate::api::routes::routes().with_state(state);

    axum_test::TestServer::new(app).unwrap()
}
