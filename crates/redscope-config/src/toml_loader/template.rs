//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# redscope configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# environment = "production"   # production | development (REDSCOPE_ENV overrides)
# production_url = "https://simppl-assignment.vercel.app"
# development_url = "http://localhost:3000"
# ask_path = "/api/ask"
# posts_path = "/api/posts"
# connect_timeout_secs = 10    # 1-60
# request_timeout_secs = 60    # 0-600, 0 waits forever

[chat]
# greeting = "Hello! How can I help you today?"

[feed]
# posts_per_page = 3           # 1-50
# default_limit = 10           # 1-100
# subreddits = ["Anarchism", "Conservative", "Liberal", "PoliticalDiscussion",
#               "Republican", "Democrats", "Neoliberal", "Politics",
#               "Socialism", "WorldPolitics"]

[logging]
# level = "INFO"               # DEBUG | INFO | WARNING | ERROR
"##
}
