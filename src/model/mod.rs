/// Board item wrappers and the polymorphic item enum.
pub mod board;
/// Shared wrappers and plain models used across editors.
pub mod common;
/// Project-level settings.
pub mod project;
