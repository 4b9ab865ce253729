//! API URL helpers

use contracts::common::{EntityId, ListQuery};

/// Normalize a configured backend base URL.
///
/// Trims whitespace and trailing slashes and drops a trailing `/api`
/// segment, since request paths carry their own `/api` prefix where needed.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(normalize_base_url("http://localhost:3000/api/"), "http://localhost:3000");
/// ```
pub fn normalize_base_url(raw: &str) -> String {
    let mut base = raw.trim().trim_end_matches('/').to_string();
    if base.ends_with("/api") {
        base.truncate(base.len() - "/api".len());
    }
    base.trim_end_matches('/').to_string()
}

/// Join a normalized base with a request path
pub fn join(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// `"/products"` + id -> `"/products/42"`, the id percent-encoded
pub fn resource(collection: &str, id: &EntityId) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        urlencoding::encode(&id.as_string())
    )
}

/// Append list filters as a query string; unset filters are omitted
pub fn with_query(path: &str, query: &ListQuery) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

/// Backend URL derived from the page location: same host, backend port.
///
/// Returns an empty string outside a browser, which makes requests relative.
pub fn location_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base_url(" http://localhost:3000/api/ "), "http://localhost:3000");
        assert_eq!(normalize_base_url("https://shop.vn/admin-api"), "https://shop.vn/admin-api");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["http://a:1/api//", "http://b/", "https://c/x/api", "/api"] {
            let once = normalize_base_url(raw);
            assert_eq!(normalize_base_url(&once), once);
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join("http://h:3000", "/api/orders"), "http://h:3000/api/orders");
        assert_eq!(join("http://h:3000", "products"), "http://h:3000/products");
        assert_eq!(join("", "/auth/login"), "/auth/login");
    }

    #[test]
    fn test_resource_encodes_id() {
        assert_eq!(resource("/api/orders", &EntityId::Int(7)), "/api/orders/7");
        assert_eq!(
            resource("/products/", &EntityId::from("a b")),
            "/products/a%20b"
        );
    }

    #[test]
    fn test_with_query() {
        let q = ListQuery::new().search("tra").status("pending").limit(50);
        assert_eq!(
            with_query("/api/orders", &q),
            "/api/orders?search=tra&status=pending&limit=50"
        );
        assert_eq!(with_query("/categories", &ListQuery::new()), "/categories");
    }
}
