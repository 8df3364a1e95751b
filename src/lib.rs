pub mod client;
pub mod routes;

pub use client::{ScriptSave, StudioClient, DEFAULT_API_BASE};
pub use routes::{Route, View, ROUTES};
