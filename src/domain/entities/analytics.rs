//! Analytics row entity.

/// A row of the `analytics` table.
///
/// `real` is a copy of the original URL taken when the row was inserted; it is
/// not touched when the mapping is later overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsRow {
    pub slug: String,
    pub real: String,
    pub clicks: i64,
}

impl AnalyticsRow {
    pub fn new(slug: String, real: String, clicks: i64) -> Self {
        Self { slug, real, clicks }
    }
}

/// Input data for inserting an analytics row. Rows always start at zero clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnalyticsRow {
    pub slug: String,
    pub real: String,
}

impl NewAnalyticsRow {
    pub fn new(slug: impl Into<String>, real: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            real: real.into(),
        }
    }
}

impl From<NewAnalyticsRow> for AnalyticsRow {
    fn from(row: NewAnalyticsRow) -> Self {
        AnalyticsRow::new(row.slug, row.real, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_starts_at_zero_clicks() {
        let row: AnalyticsRow = NewAnalyticsRow::new("abc234", "https://example.com").into();

        assert_eq!(row.slug, "abc234");
        assert_eq!(row.real, "https://example.com");
        assert_eq!(row.clicks, 0);
    }
}
