//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# MedAssist Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# Overridden by the MEDASSIST_API_URL environment variable when set.
# base_url = "http://localhost:5000"
# connect_timeout_secs = 10     # 1-600
# dispatch_timeout_secs = 60    # 1-600, a slower reply counts as a failed dispatch

[chat]
# greeting = "Hello! I'm your medical assistant. How can I help you today?"
# fallback_message = "Sorry, I'm having trouble connecting. Please try again."

[logging]
# level = "info"                # trace | debug | info | warn | error
"##
}
