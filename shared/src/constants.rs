pub const APP_ROOT_ID: &str = "app";

pub const USERNAME_INPUT_ID: &str = "username";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const LOGIN_BUTTON_ID: &str = "login-button";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";

pub const USERNAME_FIELD_NAME: &str = "username";
pub const PASSWORD_FIELD_NAME: &str = "password";

pub const LOGIN_HEADING: &str = "login";
pub const USERNAME_LABEL: &str = "username";
pub const PASSWORD_LABEL: &str = "password";
pub const LOGIN_BUTTON_LABEL: &str = "login";
pub const LOGOUT_BUTTON_LABEL: &str = "logout";

// Query string key read by the frontend to override the log level, e.g. `?log=debug`.
pub const LOG_LEVEL_QUERY_KEY: &str = "log";
