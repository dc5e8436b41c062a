//! Default configuration values.
//!
//! The constants mirror the defaults of the command-line generator this
//! tool replaces; the functions below are what serde's `default = "..."`
//! attributes point at.

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_DIR: &str = "./publish";
pub const DEFAULT_GFWLIST: &str = "geolocation-!cn";
pub const DEFAULT_DAT_NAME: &str = ruleset_export::GEOSITE_FILE_NAME;
pub use ruleset_export::DEFAULT_HOMEPAGE;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

pub const DEFAULT_EXPORT_LISTS: &[&str] = &[
    "cdn",
    "cn",
    "geolocation-cn",
    "geolocation-!cn",
    "private",
    "apple",
    "icloud",
    "google",
    "steam",
    "bilibili",
    "paypal",
    "openai",
    "netflix",
    "tiktok",
    "category-ai-chat-!cn",
    "category-media",
];

/// Lists routed with the `direct` policy in Quantumult X snippets.
pub const DEFAULT_DIRECT_LISTS: &[&str] = &["PRIVATE", "CN", "TLD-CN", "GEOLOCATION-CN", "BILIBILI"];

/// Default exclusions in `list@tag@tag,...` form.
pub const DEFAULT_EXCLUDE_ATTRS: &str = "cn@!cn@ads,geolocation-cn@!cn@ads,geolocation-!cn@cn@ads";

/// Accepted `[logging] format` values.
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                $const_name.to_string()
            }
        )*
    };
}

/// Generate default value functions that return Vec<String> from &[&str] constants.
macro_rules! default_list_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> Vec<String> {
                $const_name.iter().map(|s| s.to_string()).collect()
            }
        )*
    };
}

default_string_fns! {
    default_data_dir   => DEFAULT_DATA_DIR,
    default_output_dir => DEFAULT_OUTPUT_DIR,
    default_gfwlist    => DEFAULT_GFWLIST,
    default_dat_name   => DEFAULT_DAT_NAME,
    default_homepage   => DEFAULT_HOMEPAGE,
    default_log_level  => DEFAULT_LOG_LEVEL,
    default_log_format => DEFAULT_LOG_FORMAT,
}

default_list_fns! {
    default_export_lists => DEFAULT_EXPORT_LISTS,
    default_direct_lists => DEFAULT_DIRECT_LISTS,
}
