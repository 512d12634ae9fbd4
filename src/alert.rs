use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use utoipa::ToSchema;

use crate::utils::now_local;

/// The fixed set of emergencies a teacher can broadcast about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyKind {
    Earthquake,
    Fire,
    Flood,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
}

impl EmergencyKind {
    pub const ALL: [EmergencyKind; 4] = [
        EmergencyKind::Earthquake,
        EmergencyKind::Fire,
        EmergencyKind::Flood,
        EmergencyKind::Storm,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            EmergencyKind::Earthquake => "Earthquake",
            EmergencyKind::Fire => "Fire Emergency",
            EmergencyKind::Flood => "Flood Warning",
            EmergencyKind::Storm => "Severe Weather",
        }
    }

    /// The canned message broadcast for this emergency.
    pub fn canonical_message(self) -> &'static str {
        match self {
            EmergencyKind::Earthquake => {
                "Alert: Earthquake detected. All students are safe. Stay calm and follow \
                 evacuation procedures. Will update further."
            }
            EmergencyKind::Fire => {
                "Alert: Fire emergency in the building. All students have been evacuated \
                 safely. Emergency services on site. Will update further."
            }
            EmergencyKind::Flood => {
                "Alert: Flood warning issued. All students are secure in upper floors. No \
                 immediate danger. Will keep you updated."
            }
            EmergencyKind::Storm => {
                "Alert: Severe weather conditions. All students are safely sheltered \
                 indoors. Classes continue normally. Will update further."
            }
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            EmergencyKind::Earthquake | EmergencyKind::Fire => Severity::Critical,
            EmergencyKind::Flood | EmergencyKind::Storm => Severity::Warning,
        }
    }

    pub fn describe(self) -> AlertKindInfo {
        AlertKindInfo {
            kind: self,
            display_name: self.display_name().to_string(),
            message: self.canonical_message().to_string(),
            severity: self.severity(),
        }
    }
}

/// One emergency kind as presented on the alert panel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertKindInfo {
    pub kind: EmergencyKind,
    pub display_name: String,
    pub message: String,
    pub severity: Severity,
}

/// Transient user-facing notification sink: the toast service of the UI.
/// Injected so tests can record what was raised.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Default sink; structured log lines stand in for on-screen toasts.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, body: &str) {
        info!("{title}: {body}");
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertConfirmation {
    pub kind: EmergencyKind,
    pub title: String,
    pub detail: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
}

/// Simulated broadcast: resolves the canned message for the kind and raises
/// exactly one confirmation toast. Nothing is transmitted anywhere.
pub struct AlertDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl AlertDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn send(&self, kind: EmergencyKind) -> AlertConfirmation {
        info!(
            "sending {} alert: {}",
            kind.display_name(),
            kind.canonical_message()
        );
        let confirmation = AlertConfirmation {
            kind,
            title: "Alert Sent Successfully".to_string(),
            detail: format!(
                "{} alert has been sent to all parents.",
                kind.display_name()
            ),
            sent_at: now_local(),
        };
        self.notifier
            .notify(&confirmation.title, &confirmation.detail);
        confirmation
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        raised: Mutex<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.raised
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
        }
    }

    #[test]
    fn every_kind_dispatches_one_confirmation() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = AlertDispatcher::new(notifier.clone());

        for kind in EmergencyKind::ALL {
            let confirmation = dispatcher.send(kind);
            assert_eq!(confirmation.kind, kind);
            assert_eq!(confirmation.title, "Alert Sent Successfully");
            assert!(confirmation.detail.contains(kind.display_name()));
        }

        let raised = notifier.raised.lock().unwrap();
        assert_eq!(raised.len(), EmergencyKind::ALL.len());
        assert!(raised[0].1.contains("Earthquake"));
        assert!(raised[3].1.contains("Severe Weather"));
    }

    #[test]
    fn severity_splits_critical_and_warning() {
        assert_eq!(EmergencyKind::Earthquake.severity(), Severity::Critical);
        assert_eq!(EmergencyKind::Fire.severity(), Severity::Critical);
        assert_eq!(EmergencyKind::Flood.severity(), Severity::Warning);
        assert_eq!(EmergencyKind::Storm.severity(), Severity::Warning);
    }

    #[test]
    fn messages_name_the_emergency() {
        assert!(
            EmergencyKind::Earthquake
                .canonical_message()
                .starts_with("Alert: Earthquake detected.")
        );
        assert!(
            EmergencyKind::Flood
                .canonical_message()
                .contains("Flood warning issued")
        );
    }
}
