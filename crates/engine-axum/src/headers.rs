use http::HeaderMap;

/// Copies every header in `headers` onto `target`, overwriting any
/// existing value for the same name. Header legality is whatever
/// [`HeaderMap`] already enforces; nothing is validated here.
pub fn set_headers(target: &mut HeaderMap, headers: &HeaderMap) {
    for (name, value) in headers {
        target.insert(name.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn copies_all_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-foo", HeaderValue::from_static("bar"));

        let mut target = HeaderMap::new();
        set_headers(&mut target, &headers);

        assert_eq!(target.get("content-type").unwrap(), "application/json");
        assert_eq!(target.get("x-foo").unwrap(), "bar");
    }

    #[test]
    fn overwrites_existing_values() {
        let mut target = HeaderMap::new();
        target.insert("x-foo", HeaderValue::from_static("old"));

        let mut headers = HeaderMap::new();
        headers.insert("x-foo", HeaderValue::from_static("new"));

        set_headers(&mut target, &headers);

        assert_eq!(target.get_all("x-foo").iter().count(), 1);
        assert_eq!(target.get("x-foo").unwrap(), "new");
    }
}
