use crate::cors::policy::CorsPolicyError;
use crate::cors::{
    CorsPolicy, FIRECRAWL_WEBHOOK_POLICY, SUPABASE_CLIENT_POLICY, X_FIRECRAWL_SECRET,
};
use http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};

#[test]
fn test_firecrawl_webhook_policy_allows_secret_header() {
    assert_eq!(
        FIRECRAWL_WEBHOOK_POLICY.allow_headers(),
        "authorization, x-client-info, apikey, content-type, x-firecrawl-secret"
    );
}

#[test]
fn test_supabase_client_policy_allow_headers() {
    assert_eq!(
        SUPABASE_CLIENT_POLICY.allow_headers(),
        "authorization, x-client-info, apikey, content-type"
    );
    assert!(!SUPABASE_CLIENT_POLICY
        .allow_headers()
        .to_str()
        .unwrap()
        .contains(X_FIRECRAWL_SECRET));
}

#[test]
fn test_both_policies_allow_any_origin() {
    assert_eq!(FIRECRAWL_WEBHOOK_POLICY.allow_origin(), "*");
    assert_eq!(SUPABASE_CLIENT_POLICY.allow_origin(), "*");
}

#[test]
fn test_headers_contain_exactly_two_entries() {
    let headers = FIRECRAWL_WEBHOOK_POLICY.headers();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[ACCESS_CONTROL_ALLOW_HEADERS],
        "authorization, x-client-info, apikey, content-type, x-firecrawl-secret"
    );
}

#[test]
fn test_rereading_policy_yields_identical_contents() {
    let first = SUPABASE_CLIENT_POLICY.headers();
    let mut copy = SUPABASE_CLIENT_POLICY.headers();
    copy.insert(ACCESS_CONTROL_ALLOW_ORIGIN, "https://example.com".parse().unwrap());
    let second = SUPABASE_CLIENT_POLICY.headers();

    assert_eq!(first, second);
    assert!(std::ptr::eq(&*SUPABASE_CLIENT_POLICY, &*SUPABASE_CLIENT_POLICY));
}

#[test]
fn test_builder_ignores_duplicate_header_names() {
    let policy = CorsPolicy::builder()
        .allow_origin("*")
        .allow_header("Content-Type")
        .allow_header("apikey")
        .allow_header("content-type")
        .build()
        .unwrap();

    assert_eq!(policy.allow_headers(), "content-type, apikey");
}

#[test]
fn test_builder_without_origin_fails() {
    let result = CorsPolicy::builder().allow_header("apikey").build();

    assert_eq!(result, Err(CorsPolicyError::NoOrigin));
}

#[test]
fn test_builder_rejects_invalid_values() {
    let bad_origin = CorsPolicy::builder().allow_origin("http://a\nb").build();
    let bad_header = CorsPolicy::builder()
        .allow_origin("*")
        .allow_header("not a header")
        .build();

    assert_eq!(
        bad_origin,
        Err(CorsPolicyError::InvalidOrigin(String::from("http://a\nb")))
    );
    assert_eq!(
        bad_header,
        Err(CorsPolicyError::InvalidHeaderName(String::from("not a header")))
    );
}
