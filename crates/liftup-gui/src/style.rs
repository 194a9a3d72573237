//! Design tokens: spacing, typography, and layout constants.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_2XL: f32 = 32.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_SM: f32 = 13.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 17.0;
pub const TEXT_TITLE: f32 = 30.0;

// ── Icons ────────────────────────────────────────────────────────

pub const ICON_SM: f32 = 16.0;
pub const ICON_MD: f32 = 24.0;
pub const ICON_LG: f32 = 32.0;
pub const ICON_LOGO: f32 = 40.0;

// ── Corner radii ─────────────────────────────────────────────────

pub const RADIUS_CARD: f32 = 8.0;
pub const RADIUS_PILL: f32 = 100.0;
pub const RADIUS_SHEET: f32 = 30.0;

// ── Accessibility sheet ──────────────────────────────────────────

/// Full sheet height; also the offscreen travel distance.
pub const SHEET_HEIGHT: f32 = 380.0;
pub const CARD_WIDTH: f32 = 120.0;
pub const CARD_HEIGHT: f32 = 100.0;

// ── Window ───────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
