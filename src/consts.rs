//! Markup contract shared with the server-rendered templates.

// ── Radio groups ────────────────────────────────────────────────

pub const TEMPERATURE_UNIT_GROUP: &str = "temperature-unit";
pub const PRESSURE_UNIT_GROUP: &str = "pressure-unit";
pub const WIND_UNIT_GROUP: &str = "wind-unit";
pub const VISIBILITY_UNIT_GROUP: &str = "visibility-unit";

// ── Form controls ───────────────────────────────────────────────

/// Class carried by every password visibility control.
pub const TOGGLE_PASSWORD_CLASS: &str = "toggle-password";

/// Attribute on a toggle control naming the field (id or name) it drives.
pub const TOGGLE_TARGET_ATTR: &str = "data-target";

pub const AVATAR_INPUT_ID: &str = "avatar-upload";
pub const FILE_NAME_ID: &str = "file-name";
pub const GENDER_SELECT_ID: &str = "id_gender";

/// Id of the optional `<script type="application/json">` settings block.
pub const CONFIG_SCRIPT_ID: &str = "portal-ui-config";

// ── Rendering ───────────────────────────────────────────────────

/// Icon class used when a wind direction code is not in the compass table.
pub const FALLBACK_ICON_CLASS: &str = "bi-question";

/// Class of the icon child inside a wind element.
pub const ICON_BASE_CLASS: &str = "bi";

/// Appended to a file name cut at the display limit.
pub const ELLIPSIS: &str = "...";

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_TIMEZONE_ENDPOINT: &str = "/set_timezone/";
pub const DEFAULT_FALLBACK_TIMEZONE: &str = "UTC";
pub const DEFAULT_FILE_NAME_MAX_LEN: usize = 14;
pub const DEFAULT_NO_FILE_CHOSEN: &str = "No file chosen";
pub const DEFAULT_PLACEHOLDER_COLOR: &str = "var(--color-secondary)";
pub const DEFAULT_SELECTED_COLOR: &str = "var(--color-primary)";
