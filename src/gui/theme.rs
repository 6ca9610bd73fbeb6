//! GUI Theme: "Lockdown Terminal" - green phosphor on black with alarm red
//!
//! Color constants for the daylock window.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: near-black
pub const BG_PRIMARY: Color32 = Color32::from_rgb(8, 10, 8);
/// Card background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(18, 24, 18);
/// Unlocked card background
pub const BG_UNLOCKED: Color32 = Color32::from_rgb(14, 40, 20);
/// Alarm banner background
pub const BG_ALARM: Color32 = Color32::from_rgb(60, 10, 10);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 240, 230);
pub const TEXT_DIM: Color32 = Color32::from_rgb(140, 150, 140);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 90, 80);

// ═══════════════════════════════════════════════════════════════════════════
// STATUS COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(74, 222, 128);
pub const STATUS_CURRENT: Color32 = Color32::from_rgb(250, 204, 21);
pub const STATUS_LOCKED_DATE: Color32 = Color32::from_rgb(127, 29, 29);
pub const STATUS_LOCKED_PROGRESS: Color32 = Color32::from_rgb(75, 85, 99);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const ACCENT_RED: Color32 = Color32::from_rgb(239, 68, 68);
