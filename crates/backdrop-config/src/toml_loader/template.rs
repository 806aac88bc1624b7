/// Default config file content. Everything is commented out so the file
/// documents the defaults without pinning them.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Backdrop Configuration
# Only override what you want to change -- missing fields use defaults.

[catalog]
# source = "builtin"       # builtin, directory, url
# directory = "/path/to/data"  # must contain patterns.json and gradients.json
# base_url = "https://example.com/data"
# timeout_secs = 10        # 1-60

[output]
# pattern_selector = ".pattern-background"
# gradient_selector = ".gradient-background"
# hybrid_selector = ".hybrid-background"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
