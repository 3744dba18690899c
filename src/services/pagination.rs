use crate::{
    api::middleware::error::{ApiError, ApiResult},
    models::PaginationEnvelope,
};

/// Fields a list request may sort by.
pub const SORTABLE_FIELDS: &[&str] = &["id", "name", "date"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Asc,
    Desc,
}

/// One sort criterion: a field name and a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOrder {
    pub field: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// A client page request. Absent `size` means unpaged: all rows, one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn paged(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    /// Parse the raw query pairs of a list request.
    ///
    /// `sort` is repeatable, each occurrence `field` or `field,desc`;
    /// unknown parameters are ignored.
    pub fn from_query(pairs: &[(String, String)]) -> ApiResult<Self> {
        let mut request = PageRequest::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => request.page = Some(parse_number("page", value)?),
                "size" => request.size = Some(parse_number("size", value)?),
                "sort" => request.sort.push(parse_sort(value)),
                _ => {}
            }
        }

        if request.page.is_some_and(|p| p < 0) {
            return Err(ApiError::invalid_argument("page", "must not be negative"));
        }
        if request.size.is_some_and(|s| s < 1) {
            return Err(ApiError::invalid_argument("size", "must be positive"));
        }
        // A page index without a size cannot be honored; rejecting it beats
        // silently ignoring a parameter the client sent.
        if request.page.is_some() && request.size.is_none() {
            return Err(ApiError::invalid_argument(
                "size",
                "is required when page is given",
            ));
        }

        Ok(request)
    }

    pub fn is_paged(&self) -> bool {
        self.size.is_some()
    }

    /// The (limit, offset) pair for the store query; limit None when unpaged.
    pub fn limit_offset(&self) -> (Option<i64>, i64) {
        match self.size {
            Some(size) => (Some(size), self.page.unwrap_or(0) * size),
            None => (None, 0),
        }
    }

    /// The query pairs a remote caller sends for this request, in the same
    /// shape `from_query` parses.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }
        for order in &self.sort {
            let value = match order.direction {
                Direction::Asc => order.field.clone(),
                Direction::Desc => format!("{},desc", order.field),
            };
            pairs.push(("sort".to_string(), value));
        }

        pairs
    }
}

fn parse_number(name: &'static str, value: &str) -> ApiResult<i64> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_argument(name, "must be a number"))
}

fn parse_sort(value: &str) -> SortOrder {
    match value.split_once(',') {
        Some((field, dir)) if dir.eq_ignore_ascii_case("desc") => SortOrder::desc(field),
        Some((field, dir)) if dir.eq_ignore_ascii_case("asc") => SortOrder::asc(field),
        // No recognized direction suffix: the whole value is the field name
        // and sort-field validation deals with it.
        _ => SortOrder::asc(value),
    }
}

/// Build the ORDER BY clause for a list of sort criteria.
///
/// Every field must be in `SORTABLE_FIELDS`; an `id ASC` tiebreak is
/// appended unless id is already a criterion, so page boundaries stay
/// deterministic between calls.
pub fn order_by_clause(sort: &[SortOrder]) -> ApiResult<String> {
    let mut parts = Vec::with_capacity(sort.len() + 1);

    for order in sort {
        if !SORTABLE_FIELDS.contains(&order.field.as_str()) {
            return Err(ApiError::bad_sort_field(order.field.clone()));
        }
        let direction = match order.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        parts.push(format!("{} {}", order.field, direction));
    }

    if !sort.iter().any(|o| o.field == "id") {
        parts.push("id ASC".to_string());
    }

    Ok(parts.join(", "))
}

/// Wrap one page of items in the response envelope.
pub fn envelope<T>(items: Vec<T>, total_items: i64, request: &PageRequest) -> PaginationEnvelope<T> {
    match request.size {
        Some(size) => PaginationEnvelope {
            items,
            total_items,
            total_pages: (total_items + size - 1) / size,
            current_page: request.page.unwrap_or(0),
            page_size: size,
        },
        None => PaginationEnvelope {
            items,
            total_items,
            total_pages: 1,
            current_page: 0,
            page_size: total_items,
        },
    }
}
