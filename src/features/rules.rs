//! The feature rules.
//!
//! Thirty independently evaluated rules, each a pure function of the parsed
//! URL and/or the fetched page content, each producing one signal in
//! {-1, 0, 1}. Polarity follows the trained schema exactly: most rules use
//! +1 for "risk indicator present", but `HTTPSDomainURL`,
//! `LinksInScriptTags`, `ServerFormHandler` and `DisableRightClick` invert
//! that convention. The inversions are part of the encoding the classifier
//! was fit against and must not be normalized.
//!
//! Five rules (`AgeofDomain`, `DNSRecording`, `WebsiteTraffic`, `PageRank`,
//! `StatsReport`) are constant placeholders carrying no real signal. They
//! stay constant for output-shape compatibility; wiring them to WHOIS or
//! traffic-rank data would shift the feature distribution under the trained
//! classifier.

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::config::{
    LONG_URL_THRESHOLD, MAX_URL_DOTS, REDIRECT_SCAN_OFFSET,
    REGISTRABLE_LABEL_LENGTH_THRESHOLD, SHORT_URL_THRESHOLD, STANDARD_PORTS,
};
use crate::features::schema::{FeatureName, FEATURE_COUNT};
use crate::features::vector::Signal;
use crate::parse::ParsedUrl;

static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}").expect("dotted-quad pattern is a valid literal")
});

fn flag(risky: bool) -> Signal {
    if risky {
        1
    } else {
        -1
    }
}

/// Evaluates all rules against a parsed URL and its (possibly empty) page
/// content, returning the signals and the reasons for every +1 branch that
/// fired, both in schema order.
pub fn evaluate(parsed: &ParsedUrl, content: &str) -> (Vec<Signal>, Vec<String>) {
    let mut signals = Vec::with_capacity(FEATURE_COUNT);
    let mut reasons = Vec::new();

    for name in FeatureName::iter() {
        let signal = evaluate_rule(name, parsed, content);
        if signal == 1 {
            if let Some(reason) = name.reason() {
                reasons.push(reason.to_string());
            }
        }
        signals.push(signal);
    }

    (signals, reasons)
}

/// Evaluates a single rule.
pub fn evaluate_rule(name: FeatureName, parsed: &ParsedUrl, content: &str) -> Signal {
    match name {
        FeatureName::UsingIp => flag(DOTTED_QUAD.is_match(&parsed.netloc)),
        FeatureName::LongUrl => flag(url_len(parsed) > LONG_URL_THRESHOLD),
        FeatureName::ShortUrl => flag(url_len(parsed) >= SHORT_URL_THRESHOLD),
        FeatureName::SymbolAt => flag(parsed.raw.contains('@')),
        FeatureName::Redirecting => {
            // Only `//` past the protocol prefix counts as a redirect marker.
            let tail: String = parsed.raw.chars().skip(REDIRECT_SCAN_OFFSET).collect();
            flag(tail.contains("//"))
        }
        FeatureName::PrefixSuffix => flag(parsed.registrable_domain.contains('-')),
        FeatureName::SubDomains => flag(parsed.dot_count > MAX_URL_DOTS),
        FeatureName::Https => flag(parsed.scheme != "https"),
        FeatureName::DomainRegLen => flag(
            parsed.registrable_domain.chars().count() > REGISTRABLE_LABEL_LENGTH_THRESHOLD,
        ),
        FeatureName::Favicon => flag(parsed.raw.to_lowercase().contains("favicon")),
        FeatureName::NonStdPort => {
            flag(parsed.port.is_some_and(|p| !STANDARD_PORTS.contains(&p)))
        }
        // An empty netloc is trivially contained, so scheme-less inputs land
        // on the +1 branch just as they did in the trained encoding.
        FeatureName::HttpsDomainUrl => flag(parsed.raw.contains(&parsed.netloc)),
        FeatureName::RequestUrl => flag(content.contains("src=")),
        FeatureName::AnchorUrl => flag(content.contains("href=")),
        FeatureName::LinksInScriptTags => flag(!content.contains("<script>")),
        FeatureName::ServerFormHandler => flag(!content.contains("mailto:")),
        FeatureName::InfoEmail => flag(content.contains('@')),
        FeatureName::AbnormalUrl => flag(content.contains("about:blank")),
        FeatureName::WebsiteForwarding => flag(content.contains("forward")),
        FeatureName::StatusBarCust => flag(content.contains("statusbar")),
        FeatureName::DisableRightClick => flag(!content.contains("right click")),
        FeatureName::UsingPopupWindow => flag(content.contains("popup")),
        FeatureName::IframeRedirection => flag(content.contains("<iframe")),
        FeatureName::AgeOfDomain => 1,
        FeatureName::DnsRecording => 1,
        FeatureName::WebsiteTraffic => -1,
        FeatureName::PageRank => -1,
        FeatureName::GoogleIndex => flag(content.contains("google")),
        FeatureName::LinksPointingToPage => flag(content.contains("http")),
        FeatureName::StatsReport => 0,
    }
}

fn url_len(parsed: &ParsedUrl) -> usize {
    parsed.raw.chars().count()
}
