//! The feature schema.
//!
//! The downstream classifier and its scaler were fit against one exact
//! ordering of 30 named features. That ordering is contractual: reordering
//! or omitting a position silently corrupts predictions. This module is the
//! single source of truth for the names and their positions.

use strum_macros::EnumIter as EnumIterMacro;

/// Number of features in the schema.
pub const FEATURE_COUNT: usize = 30;

/// The 30 features, in schema order.
///
/// The enum discriminants are the vector positions; `as_str()` yields the
/// exact names the scaler artifact must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FeatureName {
    /// Network location begins with a dotted-quad IPv4-like pattern.
    UsingIp,
    /// Total URL length exceeds the long-URL threshold.
    LongUrl,
    /// Total URL length relative to the short-link range.
    ShortUrl,
    /// URL contains an `@` symbol.
    SymbolAt,
    /// `//` appears past the protocol prefix.
    Redirecting,
    /// Registrable domain contains a `-`.
    PrefixSuffix,
    /// Dot count of the full URL exceeds the subdomain threshold.
    SubDomains,
    /// Scheme is not `https`.
    Https,
    /// Registrable domain label length.
    DomainRegLen,
    /// URL references a favicon.
    Favicon,
    /// Explicit port outside the standard set.
    NonStdPort,
    /// Network location occurs verbatim inside the full URL.
    HttpsDomainUrl,
    /// Page content loads external resources (`src=`).
    RequestUrl,
    /// Page content contains anchor links (`href=`).
    AnchorUrl,
    /// Page content contains inline script tags (inverted polarity).
    LinksInScriptTags,
    /// Page content contains a `mailto:` handler (inverted polarity).
    ServerFormHandler,
    /// Page content contains an `@` (email address indicator).
    InfoEmail,
    /// Page content references `about:blank`.
    AbnormalUrl,
    /// Page content contains forwarding markup.
    WebsiteForwarding,
    /// Page content touches the status bar.
    StatusBarCust,
    /// Page content mentions right-click handling (inverted polarity).
    DisableRightClick,
    /// Page content mentions popup windows.
    UsingPopupWindow,
    /// Page content embeds an iframe.
    IframeRedirection,
    /// Placeholder constant; no real signal computed.
    AgeOfDomain,
    /// Placeholder constant; no real signal computed.
    DnsRecording,
    /// Placeholder constant; no real signal computed.
    WebsiteTraffic,
    /// Placeholder constant; no real signal computed.
    PageRank,
    /// Page content references Google.
    GoogleIndex,
    /// Page content links out to other sites.
    LinksPointingToPage,
    /// Placeholder constant; no real signal computed.
    StatsReport,
}

impl FeatureName {
    /// The feature's position in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The contractual feature name, as the scaler artifact spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::UsingIp => "UsingIP",
            FeatureName::LongUrl => "LongURL",
            FeatureName::ShortUrl => "ShortURL",
            FeatureName::SymbolAt => "Symbol@",
            FeatureName::Redirecting => "Redirecting//",
            FeatureName::PrefixSuffix => "PrefixSuffix-",
            FeatureName::SubDomains => "SubDomains",
            FeatureName::Https => "HTTPS",
            FeatureName::DomainRegLen => "DomainRegLen",
            FeatureName::Favicon => "Favicon",
            FeatureName::NonStdPort => "NonStdPort",
            FeatureName::HttpsDomainUrl => "HTTPSDomainURL",
            FeatureName::RequestUrl => "RequestURL",
            FeatureName::AnchorUrl => "AnchorURL",
            FeatureName::LinksInScriptTags => "LinksInScriptTags",
            FeatureName::ServerFormHandler => "ServerFormHandler",
            FeatureName::InfoEmail => "InfoEmail",
            FeatureName::AbnormalUrl => "AbnormalURL",
            FeatureName::WebsiteForwarding => "WebsiteForwarding",
            FeatureName::StatusBarCust => "StatusBarCust",
            FeatureName::DisableRightClick => "DisableRightClick",
            FeatureName::UsingPopupWindow => "UsingPopupWindow",
            FeatureName::IframeRedirection => "IframeRedirection",
            FeatureName::AgeOfDomain => "AgeofDomain",
            FeatureName::DnsRecording => "DNSRecording",
            FeatureName::WebsiteTraffic => "WebsiteTraffic",
            FeatureName::PageRank => "PageRank",
            FeatureName::GoogleIndex => "GoogleIndex",
            FeatureName::LinksPointingToPage => "LinksPointingToPage",
            FeatureName::StatsReport => "StatsReport",
        }
    }

    /// Fixed reason string appended when this feature's +1 branch fires.
    ///
    /// Features whose value can never be +1 carry no reason. The constant
    /// placeholders that are pinned at +1 phrase theirs as "could not be
    /// verified" since no real signal is computed for them.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            FeatureName::UsingIp => Some("Uses IP address instead of domain"),
            FeatureName::LongUrl => Some("Very long URL"),
            FeatureName::ShortUrl => Some("URL length above short-link range"),
            FeatureName::SymbolAt => Some("Contains '@' symbol"),
            FeatureName::Redirecting => Some("Redirect marker '//' appears after the protocol"),
            FeatureName::PrefixSuffix => Some("Domain name has '-' symbol"),
            FeatureName::SubDomains => Some("Too many subdomains"),
            FeatureName::Https => Some("Does not use HTTPS"),
            FeatureName::DomainRegLen => Some("Domain name is unusually long"),
            FeatureName::Favicon => Some("URL references a favicon"),
            FeatureName::NonStdPort => Some("Uses a non-standard port"),
            FeatureName::HttpsDomainUrl => Some("Host name repeated inside the URL"),
            FeatureName::RequestUrl => Some("Page loads external resources"),
            FeatureName::AnchorUrl => Some("Page contains anchor links"),
            FeatureName::LinksInScriptTags => Some("No inline script tags found"),
            FeatureName::ServerFormHandler => Some("No mailto: handler found"),
            FeatureName::InfoEmail => Some("Page content contains an email address"),
            FeatureName::AbnormalUrl => Some("Page references about:blank"),
            FeatureName::WebsiteForwarding => Some("Page contains forwarding markup"),
            FeatureName::StatusBarCust => Some("Page scripts touch the status bar"),
            FeatureName::DisableRightClick => Some("No right-click handling detected"),
            FeatureName::UsingPopupWindow => Some("Page mentions popup windows"),
            FeatureName::IframeRedirection => Some("Page embeds an iframe"),
            FeatureName::AgeOfDomain => Some("Domain age could not be verified"),
            FeatureName::DnsRecording => Some("DNS record could not be verified"),
            FeatureName::WebsiteTraffic => None,
            FeatureName::PageRank => None,
            FeatureName::GoogleIndex => Some("Page references Google"),
            FeatureName::LinksPointingToPage => Some("Page links out to other sites"),
            FeatureName::StatsReport => None,
        }
    }
}

impl std::fmt::Display for FeatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
