// Rule engine tests.

use super::*;

use crate::parse::ParsedUrl;
use psl::List;
use strum::IntoEnumIterator;

fn parsed(url: &str) -> ParsedUrl {
    ParsedUrl::parse(&List, url).expect("should parse")
}

fn extract(url: &str, content: &str) -> (FeatureVector, Vec<String>) {
    let (signals, reasons) = evaluate(&parsed(url), content);
    (FeatureVector::from_signals(&signals), reasons)
}

#[test]
fn test_vector_has_thirty_ternary_entries() {
    let (vector, _) = extract("https://www.example.com/login", "<html>href= src=</html>");
    assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
    assert!(vector.as_slice().iter().all(|s| matches!(s, -1 | 0 | 1)));
}

#[test]
fn test_using_ip_fires_for_dotted_quad_host() {
    let (vector, reasons) = extract("http://192.168.1.1/login", "");
    assert_eq!(vector.get(FeatureName::UsingIp), 1);
    assert!(reasons.contains(&"Uses IP address instead of domain".to_string()));

    let (vector, _) = extract("http://example.com/login", "");
    assert_eq!(vector.get(FeatureName::UsingIp), -1);
}

#[test]
fn test_using_ip_anchors_at_netloc_start() {
    // Credentials push the dotted quad off the start of the netloc.
    let (vector, _) = extract("http://evil@192.168.1.1/", "");
    assert_eq!(vector.get(FeatureName::UsingIp), -1);
}

#[test]
fn test_long_url_boundary_at_75() {
    let base = "http://example.com/";
    let url_74 = format!("{base}{}", "a".repeat(74 - base.len()));
    let url_76 = format!("{base}{}", "a".repeat(76 - base.len()));
    assert_eq!(url_74.len(), 74);
    assert_eq!(url_76.len(), 76);

    assert_eq!(extract(&url_74, "").0.get(FeatureName::LongUrl), -1);
    assert_eq!(extract(&url_76, "").0.get(FeatureName::LongUrl), 1);
}

#[test]
fn test_short_url_boundary_at_20() {
    // 11 characters: inside the short-link range, benign branch.
    assert_eq!(extract("http://a.co", "").0.get(FeatureName::ShortUrl), -1);
    // 25 characters.
    let url = "http://example.com/abcdef";
    assert_eq!(url.len(), 25);
    assert_eq!(extract(url, "").0.get(FeatureName::ShortUrl), 1);
}

#[test]
fn test_symbol_at_detects_at_anywhere_in_url() {
    let (vector, reasons) = extract("http://example.com/a@b", "");
    assert_eq!(vector.get(FeatureName::SymbolAt), 1);
    assert!(reasons.contains(&"Contains '@' symbol".to_string()));

    let (vector, _) = extract("http://example.com/ab", "");
    assert_eq!(vector.get(FeatureName::SymbolAt), -1);
}

#[test]
fn test_redirecting_ignores_protocol_slashes() {
    assert_eq!(
        extract("http://example.com/path", "").0.get(FeatureName::Redirecting),
        -1
    );
    assert_eq!(
        extract("http://example.com//redirect", "").0.get(FeatureName::Redirecting),
        1
    );
}

#[test]
fn test_prefix_suffix_checks_registrable_domain_only() {
    assert_eq!(
        extract("http://my-bank.com/", "").0.get(FeatureName::PrefixSuffix),
        1
    );
    // A dash in the path does not count.
    assert_eq!(
        extract("http://example.com/my-page", "").0.get(FeatureName::PrefixSuffix),
        -1
    );
}

#[test]
fn test_sub_domains_counts_dots_in_full_url() {
    assert_eq!(
        extract("http://a.b.c.example.com", "").0.get(FeatureName::SubDomains),
        1
    );
    assert_eq!(
        extract("http://www.example.com", "").0.get(FeatureName::SubDomains),
        -1
    );
}

#[test]
fn test_https_polarity() {
    let (vector, reasons) = extract("https://example.com", "");
    assert_eq!(vector.get(FeatureName::Https), -1);
    assert!(!reasons.contains(&"Does not use HTTPS".to_string()));

    let (vector, reasons) = extract("http://example.com", "");
    assert_eq!(vector.get(FeatureName::Https), 1);
    assert!(reasons.contains(&"Does not use HTTPS".to_string()));
}

#[test]
fn test_domain_reg_len_boundary() {
    // "example" is 7 characters.
    assert_eq!(
        extract("http://example.com/", "").0.get(FeatureName::DomainRegLen),
        1
    );
    // "apple" is 5 characters, not over the threshold.
    assert_eq!(
        extract("http://apple.com/", "").0.get(FeatureName::DomainRegLen),
        -1
    );
}

#[test]
fn test_favicon_reference_in_url() {
    assert_eq!(
        extract("http://example.com/Favicon.ico", "").0.get(FeatureName::Favicon),
        1
    );
    assert_eq!(
        extract("http://example.com/logo.ico", "").0.get(FeatureName::Favicon),
        -1
    );
}

#[test]
fn test_non_std_port() {
    assert_eq!(
        extract("http://example.com:8080/", "").0.get(FeatureName::NonStdPort),
        1
    );
    assert_eq!(
        extract("https://example.com:443/", "").0.get(FeatureName::NonStdPort),
        -1
    );
    // No explicit port means the protocol default, which is standard.
    assert_eq!(
        extract("http://example.com/", "").0.get(FeatureName::NonStdPort),
        -1
    );
}

#[test]
fn test_https_domain_url_contains_netloc() {
    assert_eq!(
        extract("http://example.com/path", "").0.get(FeatureName::HttpsDomainUrl),
        1
    );
}

#[test]
fn test_content_rules_on_crafted_page() {
    let content = "<html><script></script><a href=\"x\">link</a>\
                   <img src=\"y\"><iframe src=\"z\"></iframe>\
                   contact@example.com popup right click</html>"
        .to_lowercase();
    let (vector, reasons) = extract("http://example.com/", &content);

    assert_eq!(vector.get(FeatureName::RequestUrl), 1);
    assert_eq!(vector.get(FeatureName::AnchorUrl), 1);
    // Inverted polarity: present means benign.
    assert_eq!(vector.get(FeatureName::LinksInScriptTags), -1);
    assert_eq!(vector.get(FeatureName::DisableRightClick), -1);
    assert_eq!(vector.get(FeatureName::InfoEmail), 1);
    assert_eq!(vector.get(FeatureName::UsingPopupWindow), 1);
    assert_eq!(vector.get(FeatureName::IframeRedirection), 1);
    assert!(reasons.contains(&"Page embeds an iframe".to_string()));
}

#[test]
fn test_content_rules_empty_content_defaults() {
    // With empty content every substring test takes its content-absent
    // branch, regardless of the URL's structural signals.
    let (vector, _) = extract("http://192.168.1.1:8080/a@b//x", "");

    assert_eq!(vector.get(FeatureName::RequestUrl), -1);
    assert_eq!(vector.get(FeatureName::AnchorUrl), -1);
    assert_eq!(vector.get(FeatureName::LinksInScriptTags), 1);
    assert_eq!(vector.get(FeatureName::ServerFormHandler), 1);
    assert_eq!(vector.get(FeatureName::InfoEmail), -1);
    assert_eq!(vector.get(FeatureName::AbnormalUrl), -1);
    assert_eq!(vector.get(FeatureName::WebsiteForwarding), -1);
    assert_eq!(vector.get(FeatureName::StatusBarCust), -1);
    assert_eq!(vector.get(FeatureName::DisableRightClick), 1);
    assert_eq!(vector.get(FeatureName::UsingPopupWindow), -1);
    assert_eq!(vector.get(FeatureName::IframeRedirection), -1);
    assert_eq!(vector.get(FeatureName::GoogleIndex), -1);
    assert_eq!(vector.get(FeatureName::LinksPointingToPage), -1);
}

#[test]
fn test_placeholder_rules_are_constant() {
    for content in ["", "<html>anything at all</html>"] {
        let (vector, _) = extract("http://example.com/", content);
        assert_eq!(vector.get(FeatureName::AgeOfDomain), 1);
        assert_eq!(vector.get(FeatureName::DnsRecording), 1);
        assert_eq!(vector.get(FeatureName::WebsiteTraffic), -1);
        assert_eq!(vector.get(FeatureName::PageRank), -1);
        assert_eq!(vector.get(FeatureName::StatsReport), 0);
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let first = extract("http://some.site.example.com/login?a=1", "");
    let second = extract("http://some.site.example.com/login?a=1", "");
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_reasons_follow_rule_order() {
    let (_, reasons) = extract("http://192.168.1.1/a@b", "");
    let ip_pos = reasons
        .iter()
        .position(|r| r == "Uses IP address instead of domain");
    let at_pos = reasons.iter().position(|r| r == "Contains '@' symbol");
    assert!(ip_pos.is_some() && at_pos.is_some());
    assert!(ip_pos < at_pos);
}

#[test]
fn test_schema_names_are_contractual() {
    let names: Vec<&str> = FeatureName::iter().map(FeatureName::as_str).collect();
    assert_eq!(names.len(), FEATURE_COUNT);
    assert_eq!(names[0], "UsingIP");
    assert_eq!(names[7], "HTTPS");
    assert_eq!(names[22], "IframeRedirection");
    assert_eq!(names[29], "StatsReport");
}

#[test]
fn test_schema_indices_match_iteration_order() {
    for (position, name) in FeatureName::iter().enumerate() {
        assert_eq!(name.index(), position, "{name} is out of order");
    }
}

#[test]
fn test_all_feature_names_nonempty() {
    for name in FeatureName::iter() {
        assert!(!name.as_str().is_empty(), "{name:?} has an empty name");
    }
}

#[test]
fn test_vector_padding_and_fallback() {
    let vector = FeatureVector::from_signals(&[1, 0]);
    assert_eq!(vector.as_slice()[0], 1);
    assert_eq!(vector.as_slice()[1], 0);
    assert!(vector.as_slice()[2..].iter().all(|s| *s == -1));

    assert!(FeatureVector::fallback().as_slice().iter().all(|s| *s == -1));
}

#[test]
fn test_try_from_signals_validation() {
    assert!(FeatureVector::try_from_signals(&[0; 29]).is_err());
    assert!(FeatureVector::try_from_signals(&[2; 30]).is_err());
    assert!(FeatureVector::try_from_signals(&[0; 30]).is_ok());
}

#[test]
fn test_extraction_outcome_parts() {
    let (vector, reasons, fell_back) = ExtractionOutcome::fallback().into_parts();
    assert!(fell_back);
    assert_eq!(vector, FeatureVector::fallback());
    assert_eq!(reasons, vec![FALLBACK_REASON.to_string()]);
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_every_parseable_url_yields_thirty_ternary_signals(
        url in "[a-z0-9:/@.#?-]{0,100}"
    ) {
        if let Ok(p) = ParsedUrl::parse(&List, &url) {
            let (signals, _) = evaluate(&p, "");
            let vector = FeatureVector::from_signals(&signals);
            prop_assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
            prop_assert!(vector.as_slice().iter().all(|s| matches!(s, -1 | 0 | 1)));
        }
    }
}
