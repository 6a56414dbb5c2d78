use log::Level;

pub const PRACTITIONER_NAME: &str = "Hully Rodrigues Mangueira";
pub const PRACTICE_SUBTITLE: &str = "Consultório de Psicologia";
pub const WHATSAPP_DISPLAY: &str = "(83) 99999-2191";
pub const WHATSAPP_LINK: &str = "https://wa.me/5583999992191";

// Upper bound on one webhook POST before it counts as a transport failure.
pub const WEBHOOK_TIMEOUT_MS: u32 = 15_000;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
