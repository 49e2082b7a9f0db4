//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `error_*` - Shared error output
//! - `{command}_{component}` - Command-specific messages (e.g., projects_list_*)
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct Messages {
    // ============================================================================
    // Error Messages (alphabetically sorted)
    // ============================================================================
    pub error_generic: &'static str,

    // ============================================================================
    // Greeting Messages
    // ============================================================================
    pub goodbye_farewell: &'static str,
    pub greet_hello: &'static str,

    // ============================================================================
    // Project Discovery Messages (alphabetically sorted)
    // ============================================================================
    pub projects_hint_check_root: &'static str,
    pub projects_hint_set_root: &'static str,
    pub projects_list_empty: &'static str,

    // ============================================================================
    // Configuration Messages
    // ============================================================================
    pub config_hint_check_file: &'static str,
}

pub const MESSAGES: Messages = Messages {
    error_generic: "❌ Error: {error}",

    goodbye_farewell: "Goodbye, {name}! 👋",
    greet_hello: "Hello, {name}!",

    projects_hint_check_root: "Check that the folder exists and that you can read it: {path}",
    projects_hint_set_root: "Pass the folder to search with --root-folder <PATH>",
    projects_list_empty: "No Snowflake projects found under {root}",

    config_hint_check_file: "Check the configuration file syntax, or remove it to use defaults",
};
