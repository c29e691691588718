//! Filtering and pagination over an in-memory dataset.

use super::filter::SearchFilter;
use super::page::{paginate, Page, PageRequest};
use crate::model::Person;

/// Every person matching `filter`, in dataset order.
pub fn filter_people(people: &[Person], filter: &SearchFilter) -> Vec<Person> {
    if filter.is_empty() {
        return people.to_vec();
    }

    people
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Applies `filter` to `people` and returns page `req` of the matches.
///
/// Pure and idempotent: the same inputs always give the same page.
pub fn resolve(people: &[Person], filter: &SearchFilter, req: PageRequest) -> Page<Person> {
    let matched = filter_people(people, filter);
    let page = paginate(&matched, req);

    tracing::debug!(
        total = page.total_elements,
        pages = page.total_pages,
        page = page.number,
        "resolved search"
    );

    page
}
