use desap_core::{Person, Status};
use serde::Serialize;

/// A person plus the status the frontend should display.
///
/// `statusAtual` is the explicit status when the record carries one and
/// the derived status otherwise, so clients never re-derive it.
#[derive(Debug, Serialize)]
pub struct PersonDto {
    #[serde(flatten)]
    pub person: Person,
    #[serde(rename = "statusAtual")]
    pub current_status: Status,
    #[serde(rename = "rotuloStatus")]
    pub status_label: &'static str,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            current_status: person.status(),
            status_label: person.status_label(),
            person,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub source: &'static str,
}
