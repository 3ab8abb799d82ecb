//! Order-preserving query string parameters.

use std::fmt;

/// Query string parameters in the order they appeared in the URL.
///
/// Unlike a map, this keeps parameter order and duplicate keys intact so a
/// URL can be rewritten without disturbing parameters it does not own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<Param>,
}

/// A decoded pair. `raw` holds the segment as it arrived in the URL and is
/// written back verbatim until the pair is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Param {
    key: String,
    value: String,
    raw: Option<String>,
}

impl Param {
    fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            raw: None,
        }
    }

    fn encoded(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => format!(
                "{}={}",
                urlencoding::encode(&self.key),
                urlencoding::encode(&self.value)
            ),
        }
    }
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Keys and values are percent-decoded and `+` is read as a space.
    /// Empty segments (`a=1&&b=2`) are skipped; a key without `=` gets an
    /// empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let mut parts = segment.splitn(2, '=');
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                Param {
                    key: decode_component(key),
                    value: decode_component(value),
                    raw: Some(segment.to_string()),
                }
            })
            .collect();

        Self { pairs }
    }

    /// Split a `path?query` string into the path and its parsed query.
    pub fn split_path(path_with_query: &str) -> (&str, Self) {
        match path_with_query.split_once('?') {
            Some((path, query)) => (path, Self::parse(query)),
            None => (path_with_query, Self::new()),
        }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|param| param.key == key)
    }

    /// Set a key to a single value.
    ///
    /// The first existing occurrence is overwritten in place and any later
    /// duplicates are dropped. A key that is not present yet is appended.
    /// Every other pair keeps its original encoding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter().position(|param| param.key == key) {
            Some(first) => {
                let mut index = 0;
                self.pairs.retain(|param| {
                    let keep = index <= first || param.key != key;
                    index += 1;
                    keep
                });
                self.pairs[first] = Param::new(key, value);
            }
            None => self.pairs.push(Param::new(key, value)),
        }
    }

    /// Append a pair without touching existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push(Param::new(key.into(), value.into()));
    }

    /// Remove every occurrence of a key.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|param| param.key != key);
    }

    /// Iterate over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|param| (param.key.as_str(), param.value.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back to a query string (without the leading `?`). Parsed
    /// pairs that were never replaced come out exactly as they were read.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(Param::encoded)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Build a link to `path` carrying these parameters.
    pub fn href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| Param::new(k.into(), v.into()))
                .collect(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_decodes() {
        let params = QueryParams::parse("term=red+shoes&134=139&note=a%26b");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("term", "red shoes"), ("134", "139"), ("note", "a&b")]
        );
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let params = QueryParams::parse("?a=1&&b");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b"), Some(""));
    }

    #[test]
    fn test_split_path() {
        let (path, params) = QueryParams::split_path("/product/77?134=139");
        assert_eq!(path, "/product/77");
        assert_eq!(params.get("134"), Some("139"));

        let (path, params) = QueryParams::split_path("/about");
        assert_eq!(path, "/about");
        assert!(params.is_empty());
    }

    #[test]
    fn test_set_replaces_in_place_and_drops_duplicates() {
        let mut params = QueryParams::parse("a=1&b=2&a=3&c=4");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2&c=4");
    }

    #[test]
    fn test_set_appends_new_key() {
        let mut params = QueryParams::parse("a=1");
        params.set("b", "2");
        assert_eq!(params.to_query_string(), "a=1&b=2");
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.remove("a");
        assert_eq!(params.to_query_string(), "b=2");
    }

    #[test]
    fn test_to_query_string_encodes() {
        let params: QueryParams = vec![("term", "red shoes & socks")].into_iter().collect();
        assert_eq!(params.to_query_string(), "term=red%20shoes%20%26%20socks");
    }

    #[test]
    fn test_set_keeps_other_pairs_verbatim() {
        let mut params = QueryParams::parse("x=%FF&flag&q=a+b&134=139&note=a%26b");
        params.set("134", "140");
        assert_eq!(
            params.to_query_string(),
            "x=%FF&flag&q=a+b&134=140&note=a%26b"
        );
        assert_eq!(params.get("q"), Some("a b"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_set_replaces_raw_encoding_of_its_own_pair() {
        let mut params = QueryParams::parse("134=%31%33%39&134=141");
        params.set("134", "140");
        assert_eq!(params.to_query_string(), "134=140");
    }

    #[test]
    fn test_href() {
        assert_eq!(QueryParams::new().href("/p"), "/p");
        assert_eq!(QueryParams::parse("x=1").href("/p"), "/p?x=1");
    }
}
