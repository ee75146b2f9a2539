//! Inline styles. The app ships without a stylesheet, so every styled
//! element carries its own `style` attribute.

pub const PAGE: &str = "padding: 2rem; font-family: Arial, sans-serif;";

pub const MUTED_TEXT: &str = "color: #666; margin-top: 0;";

pub const ROW: &str = "display: flex; align-items: center; gap: 0.75rem;";

pub const HIDDEN: &str = "display: none;";

pub const BUTTON_PRIMARY: &str = "display: inline-flex; align-items: center; gap: 0.25rem; \
    padding: 0.4rem 0.9rem; border: none; border-radius: 4px; background: #0f6cbd; \
    color: #fff; cursor: pointer;";

pub const WARNING_BOX: &str = "display: flex; align-items: center; gap: 0.5rem; \
    margin: 0.75rem 0; padding: 0.5rem 0.75rem; border-radius: 4px; \
    background: #fff4ce; border: 1px solid #f2c94c; color: #6b4e00;";

pub const ERROR_BOX: &str = "display: flex; align-items: center; gap: 0.5rem; \
    margin: 0.75rem 0; padding: 0.5rem 0.75rem; border-radius: 4px; \
    background: #fde7e9; border: 1px solid #e8a1a8; color: #a4262c;";

pub const SUMMARY_BOX: &str = "margin: 0.75rem 0; padding: 0.75rem; border-radius: 4px; \
    background: #eef6fc; border: 1px solid #b4d6fa;";

pub const JSON_HEADER: &str =
    "display: flex; justify-content: space-between; align-items: center;";

pub const JSON_CONTENT: &str = "background: #f4f4f4; padding: 1rem; overflow: auto;";

pub const JSON_FOOTER: &str = "margin-top: 0.5rem; color: #666; font-size: 0.85rem;";
