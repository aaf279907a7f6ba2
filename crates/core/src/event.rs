use crate::category::NumberCategory;

/// All messages (events) that can flow through the application.
///
/// Sources:
/// - Number input field   → `InputChanged`, `Submit`
/// - Category buttons     → `CategorySelected`
/// - Config watcher task  → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ── User actions ──────────────────────────────────────────────────────────
    /// Text in the number field changed.
    InputChanged(String),
    /// "Add Number" pressed or Enter hit inside the field.
    Submit,
    /// User picked one of the four category buttons.
    CategorySelected(NumberCategory),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a theme reload.
    ConfigReloaded,
}
