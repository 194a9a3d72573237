pub mod home;

use liftup_core::accessibility::AccessibilityConfig;

/// Actions a screen can request from the app router.
///
/// Screens return these from `update()` instead of touching the store
/// directly — the app interprets them in one place.
pub enum Action {
    /// Replace the accessibility config (the store persists it).
    UpdateConfig(AccessibilityConfig),
    /// Restore the built-in defaults.
    ResetConfig,
    /// Toggle the accessibility sheet.
    ToggleSheet,
}
