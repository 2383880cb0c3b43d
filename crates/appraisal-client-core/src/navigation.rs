use std::fmt::Debug;

/// The application's top level navigation as seen by the request gateway
pub trait Navigator: Debug + Send + Sync + 'static {
    /// Path of the view currently displayed, without query string
    fn current_path(&self) -> String;

    /// Requests a full navigation to `location` (path plus optional query).
    ///
    /// May be called redundantly by racing failures. If the application is
    /// already showing (or moving to) the login view this must neither error
    /// nor add another history entry
    fn navigate(&self, location: &str);
}

#[cfg(target_arch = "wasm32")]
pub use web::WebNavigator;

#[cfg(target_arch = "wasm32")]
mod web {
    use appraisal_shared::{const_config::route::ROUTE_LOGIN, log_err_as_warn};
    use tracing::{debug, instrument};

    use super::Navigator;

    /// Navigates by assigning `window.location.href`, which reloads the
    /// application at the new location
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WebNavigator;

    impl Navigator for WebNavigator {
        fn current_path(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string())
        }

        #[instrument]
        fn navigate(&self, location: &str) {
            let target_path = location.split('?').next().unwrap_or(location);
            if target_path == ROUTE_LOGIN && self.current_path() == ROUTE_LOGIN {
                debug!("already on the login view");
                return;
            }
            if let Some(window) = web_sys::window() {
                log_err_as_warn!(window.location().set_href(location));
            }
        }
    }
}
