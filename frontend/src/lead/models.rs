use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// Fixed tag sent with every lead so the automation on the other side can
/// tell appointment requests apart from anything else hitting the same hook.
pub const LEAD_KIND: &str = "Agendamento de Sessão de Psicologia";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Address,
    Reason,
}

/// What the visitor has typed so far. Nothing is validated here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub reason: String,
}

impl LeadDraft {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Phone => self.phone = value,
            LeadField::Address => self.address = value,
            LeadField::Reason => self.reason = value,
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}

/// JSON body posted to the webhook.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LeadPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    pub timestamp: String,
    #[serde(rename = "tipo")]
    pub kind: &'static str,
}

impl LeadPayload {
    pub fn new(lead: &LeadDraft, timestamp: String) -> Self {
        Self {
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            address: lead.address.clone(),
            reason: lead.reason.clone(),
            timestamp,
            kind: LEAD_KIND,
        }
    }

    pub fn stamped_now(lead: &LeadDraft) -> Self {
        Self::new(lead, format_timestamp(&Local::now()))
    }
}

/// Renders a date-time the way the pt-BR locale does: `19/10/2026, 14:03:05`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn ana() -> LeadDraft {
        LeadDraft {
            name: "Ana Silva".to_string(),
            phone: "83999990000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn payload_uses_portuguese_wire_keys() {
        let payload = LeadPayload::new(&ana(), "19/10/2026, 14:03:05".to_string());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "nome": "Ana Silva",
                "telefone": "83999990000",
                "endereco": "",
                "motivo": "",
                "timestamp": "19/10/2026, 14:03:05",
                "tipo": "Agendamento de Sessão de Psicologia"
            })
        );
    }

    #[test]
    fn reason_is_sent_as_motivo() {
        let mut lead = ana();
        lead.set(LeadField::Reason, "Ansiedade no trabalho".to_string());
        let value = serde_json::to_value(LeadPayload::new(&lead, String::new())).unwrap();
        assert_eq!(value["motivo"], "Ansiedade no trabalho");
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn timestamp_matches_pt_br_rendering() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at), "07/03/2026, 09:05:01");
    }

    #[test]
    fn stamped_payload_has_a_timestamp() {
        let payload = LeadPayload::stamped_now(&ana());
        assert_eq!(payload.timestamp.len(), "07/03/2026, 09:05:01".len());
        assert_eq!(payload.kind, LEAD_KIND);
    }

    #[test]
    fn required_fields_are_name_and_phone() {
        let mut lead = LeadDraft::default();
        assert!(!lead.has_required_fields());
        lead.set(LeadField::Name, "Ana".to_string());
        assert!(!lead.has_required_fields());
        lead.set(LeadField::Phone, "83".to_string());
        assert!(lead.has_required_fields());
        assert_eq!(lead.address, "");
    }
}
