use axum::response::Html;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// GET /: the tracker page. It only talks to `/campaigns`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_targets_campaign_api() {
        assert!(INDEX_HTML.contains("/campaigns"));
        assert!(INDEX_HTML.contains("encodeURIComponent"));
    }
}
