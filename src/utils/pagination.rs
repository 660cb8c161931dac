use crate::extractors::Page;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th window of `per_page` items.
///
/// Pages are 1-based. Pages past the end and non-positive pages are empty.
pub fn paginate<T>(items: Vec<T>, Page(page): Page, per_page: usize) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);

    items.into_iter().skip(start).take(per_page).collect()
}
