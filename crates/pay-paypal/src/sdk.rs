//! # SDK URL
//!
//! Builds the `<script src>` for PayPal's browser SDK.

use url::{form_urlencoded, Url};

/// SDK components loaded by the checkout page
pub const SDK_COMPONENTS: &str = "buttons,fastlane";

/// Build `{base}/sdk/js?client-id=<id>&components=buttons,fastlane`.
///
/// `/sdk/js` replaces any path on the base. A base that is not a valid
/// URL is not rejected; the path and query are appended to it as text.
pub fn sdk_url(base_url: &str, client_id: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join("/sdk/js")) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .clear()
                .append_pair("client-id", client_id)
                .append_pair("components", SDK_COMPONENTS);
            url.to_string()
        }
        Err(_) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("client-id", client_id)
                .append_pair("components", SDK_COMPONENTS)
                .finish();
            format!("{}/sdk/js?{}", base_url, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LIVE_SDK_BASE_URL, SANDBOX_SDK_BASE_URL};

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_sandbox_url() {
        let raw = sdk_url(SANDBOX_SDK_BASE_URL, "client-abc");
        let url = Url::parse(&raw).unwrap();

        assert_eq!(url.host_str(), Some("www.sandbox.paypal.com"));
        assert_eq!(url.path(), "/sdk/js");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("client-id".to_string(), "client-abc".to_string()),
                ("components".to_string(), "buttons,fastlane".to_string()),
            ]
        );
    }

    #[test]
    fn test_base_path_is_replaced() {
        let raw = sdk_url("https://sdk.example.com/some/prefix/?x=1", "id");
        let url = Url::parse(&raw).unwrap();

        assert_eq!(url.path(), "/sdk/js");
        assert_eq!(query_pairs(&url).len(), 2);
    }

    #[test]
    fn test_client_id_is_encoded() {
        let raw = sdk_url(LIVE_SDK_BASE_URL, "a b&c");
        let url = Url::parse(&raw).unwrap();

        assert_eq!(query_pairs(&url)[0].1, "a b&c");
        assert!(raw.starts_with("https://www.paypal.com/sdk/js?client-id="));
    }

    #[test]
    fn test_empty_client_id() {
        let raw = sdk_url(SANDBOX_SDK_BASE_URL, "");
        let url = Url::parse(&raw).unwrap();
        assert_eq!(query_pairs(&url)[0], ("client-id".to_string(), String::new()));
    }

    #[test]
    fn test_unparseable_base_is_not_validated() {
        let raw = sdk_url("not a url", "id");
        assert_eq!(raw, "not a url/sdk/js?client-id=id&components=buttons%2Cfastlane");
    }
}
