//! link.rs
//! Share-link construction and token extraction.
//!
//! The token travels as the value of one query-string parameter. Building a
//! link replaces any previous value of that parameter and keeps the others.

use url::Url;

use crate::radix::is_token;
use crate::types::LinkError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    base: Url,
    param: String,
}

impl ShareLink {
    /// # Errors
    /// - `LinkError::InvalidUrl` when `base_url` does not parse.
    /// - `LinkError::Config` for an empty parameter name.
    pub fn new(base_url: &str, param: impl Into<String>) -> Result<Self, LinkError> {
        let param = param.into();
        if param.is_empty() {
            return Err(LinkError::Config("query parameter name is empty".into()));
        }
        let base = Url::parse(base_url).map_err(|source| LinkError::InvalidUrl {
            input: base_url.to_string(),
            source,
        })?;
        Ok(Self { base, param })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// URL carrying `token` in the configured parameter.
    pub fn build(&self, token: &str) -> Url {
        let mut url = self.base.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != self.param.as_str())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(&self.param, token);
        url
    }

    /// Pull the token out of a share URL, or accept a bare token as is.
    ///
    /// # Errors
    /// - `LinkError::MissingToken` for a URL without the parameter (or with an
    ///   empty value) and for blank input.
    /// - `LinkError::InvalidUrl` for input that is neither a URL nor a token.
    pub fn extract(&self, input: &str) -> Result<String, LinkError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LinkError::MissingToken { param: self.param.clone() });
        }

        match Url::parse(input) {
            Ok(url) => url
                .query_pairs()
                .find(|(key, _)| key == self.param.as_str())
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| LinkError::MissingToken { param: self.param.clone() }),
            // Bare tokens have no scheme; let the radix decoder judge the characters
            // unless the input is obviously something else.
            Err(_) if is_token(input) || !input.contains(|c: char| matches!(c, '/' | '?' | '=')) => Ok(input.to_string()),
            Err(source) => Err(LinkError::InvalidUrl { input: input.to_string(), source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> ShareLink {
        ShareLink::new("https://example.com/play/?theme=dark", "cast").unwrap()
    }

    #[test]
    fn build_appends_param_and_keeps_others() {
        let url = link().build("abc123");
        assert_eq!(url.as_str(), "https://example.com/play/?theme=dark&cast=abc123");
    }

    #[test]
    fn build_replaces_existing_value() {
        let link = ShareLink::new("https://example.com/?cast=old&x=1", "cast").unwrap();
        assert_eq!(link.build("new").as_str(), "https://example.com/?x=1&cast=new");
    }

    #[test]
    fn extract_from_url() {
        let link = link();
        let url = link.build("Zz09");
        assert_eq!(link.extract(url.as_str()).unwrap(), "Zz09");
    }

    #[test]
    fn extract_bare_token() {
        assert_eq!(link().extract("  Zz09\n").unwrap(), "Zz09");
    }

    #[test]
    fn extract_missing_param() {
        let err = link().extract("https://example.com/play/?theme=dark").unwrap_err();
        assert!(matches!(err, LinkError::MissingToken { .. }));
    }

    #[test]
    fn rejects_empty_param_name() {
        assert!(matches!(ShareLink::new("https://example.com/", ""), Err(LinkError::Config(_))));
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(matches!(ShareLink::new("not a url", "cast"), Err(LinkError::InvalidUrl { .. })));
    }
}
