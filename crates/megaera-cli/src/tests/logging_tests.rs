use crate::logging::select_log_level;
use tracing::Level;

#[test]
fn verbose_flag_overrides_the_environment() {
    assert_eq!(select_log_level(true, Some("trace")), (Level::DEBUG, None));
}

#[test]
fn log_level_from_the_environment() {
    assert_eq!(select_log_level(false, None), (Level::INFO, None));
    assert_eq!(select_log_level(false, Some(" trace ")), (Level::TRACE, None));
    assert_eq!(select_log_level(false, Some("verbose")), (Level::DEBUG, None));
    assert_eq!(select_log_level(false, Some("INFO")), (Level::INFO, None));
}

#[test]
fn invalid_log_levels_fall_back_to_info_with_a_warning() {
    let (level, warning) = select_log_level(false, Some("loud"));

    assert_eq!(level, Level::INFO);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}
