use crate::auth::Session;

/// The admin client's navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    AccountManagement,
    GroupManagement,
    ClassManagement,
    Dashboard,
}

impl Route {
    /// Everything behind the home shell requires an authenticated session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Path lookup with a catch-all: anything unknown redirects to login.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/home" => Route::Home,
            "/home/account-management" => Route::AccountManagement,
            "/home/group-management" => Route::GroupManagement,
            "/home/class-management" => Route::ClassManagement,
            "/home/dashboard" => Route::Dashboard,
            "/login" | "" | "/" => Route::Login,
            _ => Route::Login,
        }
    }
}

/// Navigation guard: unauthenticated visitors are sent to login before any
/// protected view, and an authenticated visitor asking for login is sent
/// home instead.
pub fn resolve(requested: Route, session: &Session) -> Route {
    if requested.requires_auth() && !session.is_authenticated() {
        return Route::Login;
    }
    if requested == Route::Login && session.is_authenticated() {
        return Route::Home;
    }
    requested
}
