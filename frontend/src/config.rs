use log::Level;
use shared::constants::{APP_ROOT_ID, LOG_LEVEL_QUERY_KEY};
use web_sys::{window, Element};

pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

pub fn mount_root() -> Option<Element> {
    window()?.document()?.get_element_by_id(APP_ROOT_ID)
}

/// Log level for this page load. `?log=debug` (any `log::Level` name) overrides the default.
pub fn log_level() -> Level {
    window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| parse_log_level(&search))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn parse_log_level(search: &str) -> Option<Level> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOG_LEVEL_QUERY_KEY)
        .and_then(|(_, value)| value.parse().ok())
}
