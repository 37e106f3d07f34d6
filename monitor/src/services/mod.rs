// File: monitor/src/services/mod.rs

pub mod alert_service;

pub use alert_service::{AlertPayload, AlertService, AlertSeverity, NotificationSink};
