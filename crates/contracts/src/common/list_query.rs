use serde::Serialize;

/// Query parameters accepted by list endpoints.
///
/// Empty values are dropped so the server sees only the filters that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = non_blank(text);
        self
    }

    /// `"all"` is the filter dropdown's "no filter" value
    pub fn status(mut self, status: &str) -> Self {
        self.status = non_blank(status).filter(|s| s != "all");
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn period(mut self, period: &str) -> Self {
        self.period = non_blank(period);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_skipped() {
        let q = ListQuery::new().search("   ").status("all");
        assert!(q.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let q = ListQuery::new().search("  áo thun ").status("pending").limit(50);
        assert_eq!(q.search.as_deref(), Some("áo thun"));
        assert_eq!(q.status.as_deref(), Some("pending"));
        assert_eq!(q.limit, Some(50));
    }
}
