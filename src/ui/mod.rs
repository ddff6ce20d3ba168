pub(crate) mod app;
pub(crate) mod commands;
pub(crate) mod format;
pub(crate) mod render;
pub(crate) mod screens;
pub(crate) mod theme;
