//! Key name to Android key code mapping
use phf::phf_map;

/// Friendly key names with a key code that differs from `KEYCODE_<NAME>`
pub static KEY_CODES: phf::Map<&'static str, &'static str> = phf_map! {
    "back" => "KEYCODE_BACK",
    "home" => "KEYCODE_HOME",
    "recent" => "KEYCODE_APP_SWITCH",
    "enter" => "KEYCODE_ENTER",
};

/// Resolve a key name to the code passed to `input keyevent`
///
/// Unknown names are forwarded as `KEYCODE_<NAME>`.
pub fn key_code(key: &str) -> String {
    match KEY_CODES.get(key.to_lowercase().as_str()) {
        Some(code) => code.to_string(),
        None => format!("KEYCODE_{}", key.to_uppercase()),
    }
}
