// src/state.rs

use crate::config::Settings;

/// Estado compartido entre handlers: únicamente la configuración,
/// que es de solo lectura durante toda la vida del proceso.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}
