use achievehub_application::AuthService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub frontend_url: String,
}
