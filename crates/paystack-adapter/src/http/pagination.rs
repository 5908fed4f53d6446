/*
[INPUT]:  Base endpoint path (with or without query string), count, offset
[OUTPUT]: Endpoint path with perPage/page query parameters appended
[POS]:    HTTP layer - list endpoint helpers
[UPDATE]: When pagination parameter names or encoding change
*/

/// Default page size used by list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Append pagination parameters to an endpoint path
///
/// `count` becomes `perPage` and `offset` becomes `page`, both verbatim.
/// Bounds are left to the remote API.
pub fn paginate_path(path: &str, count: u32, offset: u32) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}perPage={count}&page={offset}")
}
