//! Disappearance occurrences attached to a person.

use serde::{Deserialize, Serialize};

/// A reported disappearance and, possibly, the later location event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(rename = "dtDesaparecimento", default)]
    pub disappeared_on: Option<String>,
    #[serde(rename = "dataLocalizacao", default)]
    pub found_on: Option<String>,
    #[serde(rename = "encontradoVivo", default)]
    pub found_alive: bool,
    #[serde(rename = "localDesaparecimentoConcat", default)]
    pub location: Option<String>,
    #[serde(rename = "ocoId")]
    pub id: u64,
    #[serde(rename = "ocorrenciaEntrevDesapDTO", default)]
    pub interview: Option<Interview>,
    #[serde(rename = "listaCartaz", default)]
    pub posters: Option<Vec<Poster>>,
}

impl Occurrence {
    /// `true` when a location-found date is recorded.
    ///
    /// Blank strings count as absent; the backend sends `""` for some
    /// open occurrences.
    pub fn is_found(&self) -> bool {
        self.found_on
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    pub fn posters(&self) -> &[Poster] {
        self.posters.as_deref().unwrap_or_default()
    }
}

/// Interview notes taken when the disappearance was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(rename = "informacao", default)]
    pub testimony: Option<String>,
    #[serde(rename = "vestimentasDesaparecido", default)]
    pub clothing: Option<String>,
}

/// A published poster for the occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    #[serde(rename = "urlCartaz")]
    pub url: String,
    #[serde(rename = "tipoCartaz")]
    pub kind: PosterKind,
}

/// Format and phase of a poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosterKind {
    PdfDesaparecido,
    PdfLocalizado,
    JpgDesaparecido,
    JpgLocalizado,
    InstaDesaparecido,
    InstaLocalizado,
}

impl PosterKind {
    /// Human label, e.g. `"PDF DESAPARECIDO"`.
    pub fn label(self) -> &'static str {
        match self {
            PosterKind::PdfDesaparecido => "PDF DESAPARECIDO",
            PosterKind::PdfLocalizado => "PDF LOCALIZADO",
            PosterKind::JpgDesaparecido => "JPG DESAPARECIDO",
            PosterKind::JpgLocalizado => "JPG LOCALIZADO",
            PosterKind::InstaDesaparecido => "INSTA DESAPARECIDO",
            PosterKind::InstaLocalizado => "INSTA LOCALIZADO",
        }
    }

    /// `true` for the posters announcing that the person was found.
    pub fn is_found(self) -> bool {
        matches!(
            self,
            PosterKind::PdfLocalizado | PosterKind::JpgLocalizado | PosterKind::InstaLocalizado
        )
    }
}
