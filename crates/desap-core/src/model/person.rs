//! Missing-person records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::occurrence::Occurrence;

/// A person as returned by the backend or the local dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade", default)]
    pub age: u32,
    #[serde(rename = "sexo", default)]
    pub sex: Sex,
    #[serde(rename = "vivo", default)]
    pub alive: bool,
    #[serde(rename = "urlFoto", default)]
    pub photo_url: Option<String>,
    #[serde(
        rename = "ultimaOcorrencia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_occurrence: Option<Occurrence>,
    /// Explicit status, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Person {
    /// The explicit status if present, otherwise derived from the last
    /// occurrence: found iff a location-found date is recorded.
    pub fn status(&self) -> Status {
        if let Some(status) = self.status {
            return status;
        }
        match &self.last_occurrence {
            Some(occ) if occ.is_found() => Status::Found,
            _ => Status::Missing,
        }
    }

    /// Badge text, gendered the way the backend's audience reads it.
    pub fn status_label(&self) -> &'static str {
        let female = self.sex == Sex::Female;
        match (self.status(), female) {
            (Status::Found, true) => "Localizada",
            (Status::Found, false) => "Localizado",
            (Status::Missing, true) => "Desaparecida",
            (Status::Missing, false) => "Desaparecido",
        }
    }
}

/// Whether the person is still missing or has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "DESAPARECIDO")]
    Missing,
    #[serde(rename = "LOCALIZADO")]
    Found,
}

impl Status {
    /// Backend query value.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Missing => "DESAPARECIDO",
            Status::Found => "LOCALIZADO",
        }
    }

    /// Parses user input in either language, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "missing" | "desaparecido" | "desaparecida" => Some(Status::Missing),
            "found" | "localizado" | "localizada" => Some(Status::Found),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex as recorded by the backend: one of two known values or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
    Other(String),
    #[default]
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "MASCULINO",
            Sex::Female => "FEMININO",
            Sex::Other(s) => s,
            Sex::Unknown => "",
        }
    }

    /// Parses user input; `male`/`female` are accepted as aliases.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_uppercase().as_str() {
            "MASCULINO" | "MALE" => Sex::Male,
            "FEMININO" | "FEMALE" => Sex::Female,
            "" => Sex::Unknown,
            _ => Sex::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        Sex::parse(&s)
    }
}

impl From<Sex> for String {
    fn from(s: Sex) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_json(extra: &str) -> String {
        format!(
            r#"{{"id": 1, "nome": "Ana Silva", "idade": 25, "sexo": "FEMININO", "vivo": false, "urlFoto": null{extra}}}"#
        )
    }

    #[test]
    fn deserializes_minimal_person() {
        let p: Person = serde_json::from_str(&person_json("")).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Ana Silva");
        assert_eq!(p.age, 25);
        assert_eq!(p.sex, Sex::Female);
        assert!(p.last_occurrence.is_none());
        assert!(p.photo_url.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: Person = serde_json::from_str(&person_json(r#", "apelido": "Aninha""#)).unwrap();
        assert_eq!(p.name, "Ana Silva");
    }

    #[test]
    fn status_derived_from_location_date() {
        let found: Person = serde_json::from_str(&person_json(
            r#", "ultimaOcorrencia": {"ocoId": 9, "dataLocalizacao": "2024-01-02"}"#,
        ))
        .unwrap();
        assert_eq!(found.status(), Status::Found);

        let missing: Person = serde_json::from_str(&person_json(
            r#", "ultimaOcorrencia": {"ocoId": 9, "dataLocalizacao": null}"#,
        ))
        .unwrap();
        assert_eq!(missing.status(), Status::Missing);

        let no_occurrence: Person = serde_json::from_str(&person_json("")).unwrap();
        assert_eq!(no_occurrence.status(), Status::Missing);
    }

    #[test]
    fn explicit_status_wins_over_derived() {
        let p: Person = serde_json::from_str(&person_json(
            r#", "status": "DESAPARECIDO", "ultimaOcorrencia": {"ocoId": 9, "dataLocalizacao": "2024-01-02"}"#,
        ))
        .unwrap();
        assert_eq!(p.status(), Status::Missing);
    }

    #[test]
    fn status_label_is_gendered() {
        let mut p: Person = serde_json::from_str(&person_json("")).unwrap();
        assert_eq!(p.status_label(), "Desaparecida");
        p.sex = Sex::Male;
        p.status = Some(Status::Found);
        assert_eq!(p.status_label(), "Localizado");
    }

    #[test]
    fn status_parse_accepts_both_languages() {
        assert_eq!(Status::parse("missing"), Some(Status::Missing));
        assert_eq!(Status::parse("LOCALIZADO"), Some(Status::Found));
        assert_eq!(Status::parse(" Found "), Some(Status::Found));
        assert_eq!(Status::parse("lost"), None);
    }

    #[test]
    fn sex_round_trips_free_text() {
        assert_eq!(Sex::parse("male"), Sex::Male);
        assert_eq!(Sex::parse("Feminino"), Sex::Female);
        assert_eq!(Sex::parse("NAO INFORMADO"), Sex::Other("NAO INFORMADO".into()));
        assert_eq!(Sex::parse("   "), Sex::Unknown);

        let json = serde_json::to_string(&Sex::Other("X".into())).unwrap();
        assert_eq!(json, r#""X""#);
    }
}
