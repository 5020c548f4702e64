//! Classpath for the password change utility inside the admin webapp

use crate::types::PlatformFamily;

/// Entries below the webapp home, in classpath order
const APP_HOME_ENTRIES: &[&[&str]] = &[
    &["WEB-INF", "classes", "conf"],
    &["WEB-INF", "classes", "lib", "*"],
    &["WEB-INF"],
    &["META-INF"],
    &["WEB-INF", "lib", "*"],
    &["WEB-INF", "classes"],
    &["WEB-INF", "classes", "META-INF"],
];

/// Individual classpath entries for `app_home` and `ews_lib`
pub fn classpath_entries(app_home: &str, ews_lib: &str, platform: PlatformFamily) -> Vec<String> {
    APP_HOME_ENTRIES
        .iter()
        .map(|segments| platform.join_path(app_home, segments))
        .chain(std::iter::once(platform.join_path(ews_lib, &["*"])))
        .collect()
}

/// Build the classpath string.
///
/// A pure function of its inputs: the host platform is never consulted.
pub fn build_classpath(app_home: &str, ews_lib: &str, platform: PlatformFamily) -> String {
    let separator = platform.classpath_separator().to_string();
    classpath_entries(app_home, ews_lib, platform).join(separator.as_str())
}
