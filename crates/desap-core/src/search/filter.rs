//! Normalisation of raw search-form values into a canonical filter.

use serde::Deserialize;

use super::page::PageRequest;
use crate::model::{Person, Sex, Status};

/// Values a form sends to mean "do not filter on this field".
const NO_FILTER_SENTINELS: &[&str] = &["all", "todos", "todas", "qualquer"];

/// Search-form values exactly as the user entered them.
///
/// Field names match the backend's query parameters so the struct can be
/// extracted straight from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilter {
    pub nome: Option<String>,
    pub faixa_idade_inicial: Option<String>,
    pub faixa_idade_final: Option<String>,
    pub sexo: Option<String>,
    pub status: Option<String>,
    pub pagina: Option<String>,
    pub por_pagina: Option<String>,
}

/// Active search constraints. `None` means the field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub sex: Option<Sex>,
    pub status: Option<Status>,
}

impl SearchFilter {
    /// `true` when no field constrains the search.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether `person` satisfies every active constraint.
    pub fn matches(&self, person: &Person) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|needle| {
            person.name.to_lowercase().contains(&needle.to_lowercase())
        });

        name_ok
            && self.min_age.is_none_or(|min| person.age >= min)
            && self.max_age.is_none_or(|max| person.age <= max)
            && self.sex.as_ref().is_none_or(|sex| &person.sex == sex)
            && self.status.is_none_or(|status| person.status() == status)
    }

    /// Query parameters for the backend's filter endpoint.
    ///
    /// Unconstrained fields are left out entirely.
    pub fn query_pairs(&self, page: PageRequest) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pagina", page.index().to_string()),
            ("porPagina", page.size().to_string()),
        ];
        if let Some(name) = &self.name {
            pairs.push(("nome", name.clone()));
        }
        if let Some(min) = self.min_age {
            pairs.push(("faixaIdadeInicial", min.to_string()));
        }
        if let Some(max) = self.max_age {
            pairs.push(("faixaIdadeFinal", max.to_string()));
        }
        if let Some(sex) = &self.sex {
            pairs.push(("sexo", sex.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

/// A canonical filter together with the page being asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub filter: SearchFilter,
    pub page: PageRequest,
}

/// Builds the canonical filter from raw form values.
///
/// Never fails: empty strings, sentinels such as `"all"`, malformed or
/// negative ages and unknown status values are dropped. A missing or
/// malformed page index becomes `0`; a missing, malformed or zero page
/// size becomes `default_page_size`.
pub fn normalize(raw: &RawFilter, default_page_size: usize) -> SearchRequest {
    let filter = SearchFilter {
        name: present(&raw.nome).map(str::to_string),
        min_age: present(&raw.faixa_idade_inicial).and_then(parse_count::<u32>),
        max_age: present(&raw.faixa_idade_final).and_then(parse_count::<u32>),
        sex: present(&raw.sexo).map(Sex::parse),
        status: present(&raw.status).and_then(Status::parse),
    };

    let index = present(&raw.pagina)
        .and_then(parse_count::<usize>)
        .unwrap_or(0);
    let size = present(&raw.por_pagina)
        .and_then(parse_count::<usize>)
        .filter(|&s| s > 0)
        .unwrap_or(default_page_size);

    SearchRequest {
        filter,
        page: PageRequest::new(index, size),
    }
}

/// The trimmed value, unless it is absent, blank or a sentinel.
fn present(value: &Option<String>) -> Option<&str> {
    let trimmed = value.as_deref()?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if NO_FILTER_SENTINELS.contains(&lower.as_str()) {
        return None;
    }
    Some(trimmed)
}

fn parse_count<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawFilter {
        RawFilter::default()
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn empty_form_yields_empty_filter_and_first_page() {
        let req = normalize(&raw(), 10);
        assert!(req.filter.is_empty());
        assert_eq!(req.page, PageRequest::new(0, 10));
    }

    #[test]
    fn blank_and_sentinel_values_are_dropped() {
        let form = RawFilter {
            nome: some("   "),
            sexo: some("ALL"),
            status: some("todos"),
            faixa_idade_inicial: some(""),
            ..raw()
        };
        assert!(normalize(&form, 10).filter.is_empty());
    }

    #[test]
    fn name_is_trimmed_and_kept() {
        let form = RawFilter {
            nome: some("  ana "),
            ..raw()
        };
        assert_eq!(normalize(&form, 10).filter.name.as_deref(), Some("ana"));
    }

    #[test]
    fn malformed_ages_are_dropped_not_zeroed() {
        let form = RawFilter {
            faixa_idade_inicial: some("-3"),
            faixa_idade_final: some("quarenta"),
            ..raw()
        };
        let filter = normalize(&form, 10).filter;
        assert_eq!(filter.min_age, None);
        assert_eq!(filter.max_age, None);
    }

    #[test]
    fn valid_ages_are_parsed() {
        let form = RawFilter {
            faixa_idade_inicial: some("18"),
            faixa_idade_final: some(" 40 "),
            ..raw()
        };
        let filter = normalize(&form, 10).filter;
        assert_eq!(filter.min_age, Some(18));
        assert_eq!(filter.max_age, Some(40));
    }

    #[test]
    fn status_and_sex_are_canonicalised() {
        let form = RawFilter {
            status: some("found"),
            sexo: some("feminino"),
            ..raw()
        };
        let filter = normalize(&form, 10).filter;
        assert_eq!(filter.status, Some(Status::Found));
        assert_eq!(filter.sex, Some(Sex::Female));
    }

    #[test]
    fn unknown_status_is_dropped() {
        let form = RawFilter {
            status: some("perdido"),
            ..raw()
        };
        assert_eq!(normalize(&form, 10).filter.status, None);
    }

    #[test]
    fn page_fields_fall_back_to_defaults() {
        let form = RawFilter {
            pagina: some("x"),
            por_pagina: some("0"),
            ..raw()
        };
        assert_eq!(normalize(&form, 12).page, PageRequest::new(0, 12));

        let form = RawFilter {
            pagina: some("3"),
            por_pagina: some("25"),
            ..raw()
        };
        assert_eq!(normalize(&form, 12).page, PageRequest::new(3, 25));
    }

    #[test]
    fn deserializes_from_query_field_names() {
        let form: RawFilter = serde_json::from_str(
            r#"{"nome": "ana", "faixaIdadeInicial": "18", "porPagina": "5"}"#,
        )
        .unwrap();
        assert_eq!(form.nome, some("ana"));
        assert_eq!(form.faixa_idade_inicial, some("18"));
        assert_eq!(form.por_pagina, some("5"));
    }

    #[test]
    fn query_pairs_only_carry_active_fields() {
        let filter = SearchFilter {
            name: some("ana"),
            status: Some(Status::Missing),
            ..SearchFilter::default()
        };
        let pairs = filter.query_pairs(PageRequest::new(1, 10));
        assert_eq!(
            pairs,
            vec![
                ("pagina", "1".to_string()),
                ("porPagina", "10".to_string()),
                ("nome", "ana".to_string()),
                ("status", "DESAPARECIDO".to_string()),
            ]
        );
    }
}
