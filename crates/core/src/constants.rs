/// Constants used throughout the password change helper
// Environment variable names
pub const RANGER_ADMIN_HOME_VAR: &str = "RANGER_ADMIN_HOME";
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
pub const JAVA_OPTS_VAR: &str = "JAVA_OPTS";
pub const LOG_FILTER_VAR: &str = "RANGER_PASSWD_LOG";

// Installation layout below RANGER_ADMIN_HOME
pub const EWS_DIR: &str = "ews";
pub const EWS_LIB_DIR: &str = "lib";
pub const EWS_WEBAPP_DIR: &str = "webapp";
pub const EWS_LOGS_DIR: &str = "logs";

// Java launch
pub const JAVA_BIN_DIR: &str = "bin";
pub const JAVA_EXECUTABLE: &str = "java";
pub const LOGBACK_CONFIGURATION_FILE: &str = "db_patch.logback.xml";
pub const CHANGE_PASSWORD_MAIN_CLASS: &str = "org.apache.ranger.patch.cliutil.ChangePasswordUtil";

// Characters the new password may not contain
pub const FORBIDDEN_PASSWORD_CHARS: &[char] = &['`', '\'', '"', '\\'];

// Replacement for secret arguments in logged command lines
pub const MASKED_SECRET: &str = "********";

pub const USAGE: &str = "changepasswordutil <loginID> <currentPassword> <newPassword>";

// Every fatal condition exits with this status
pub const FAILURE_EXIT_CODE: u8 = 1;
