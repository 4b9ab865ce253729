use super::lenient;
use serde::Deserialize;

/// List response as returned by the backend.
///
/// Older endpoints answer with a bare JSON array, newer ones wrap rows into
/// `{ "items": [...], "count": N }`. Both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paged {
        #[serde(alias = "data", alias = "rows")]
        items: Vec<T>,
        #[serde(default, alias = "total", deserialize_with = "lenient::opt_number")]
        count: Option<u64>,
    },
}

impl<T> ListPayload<T> {
    /// Total number of records reported by the server (falls back to the row count)
    pub fn total(&self) -> u64 {
        match self {
            ListPayload::Plain(items) => items.len() as u64,
            ListPayload::Paged { items, count } => count.unwrap_or(items.len() as u64),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Plain(items) => items,
            ListPayload::Paged { items, .. } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_plain_array() {
        let payload: ListPayload<Row> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(payload.total(), 2);
        assert_eq!(payload.into_items(), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_items_and_count() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"{"items":[{"id":5}],"count":120}"#).unwrap();
        assert_eq!(payload.total(), 120);
        assert_eq!(payload.into_items(), vec![Row { id: 5 }]);
    }

    #[test]
    fn test_empty_shapes() {
        let plain: ListPayload<Row> = serde_json::from_str("[]").unwrap();
        assert!(plain.into_items().is_empty());

        let paged: ListPayload<Row> = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert_eq!(paged.total(), 0);
        assert!(paged.into_items().is_empty());
    }

    #[test]
    fn test_alias_data_and_total() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"{"data":[{"id":9}],"total":1}"#).unwrap();
        assert_eq!(payload.total(), 1);
    }
}
