//! The fixed taxonomy of legal documents and the keyword tables used to find them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven legal document categories a site is scored on.
///
/// Declaration order is the precedence order used by the heuristic
/// strategy and the key order of a serialized report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "R01_terms_and_conditions")]
    TermsAndConditions,
    #[serde(rename = "R02_privacy_policy")]
    PrivacyPolicy,
    #[serde(rename = "R03_ada_acc_statement")]
    AccessibilityStatement,
    #[serde(rename = "R04_cookie_usage_policy")]
    CookiePolicy,
    #[serde(rename = "R05_ai_usage_policy_disclaimer")]
    AiUsagePolicy,
    #[serde(rename = "R06_refund_and_return_policy")]
    RefundPolicy,
    #[serde(rename = "R07_dmca_slash_copyright_policy")]
    CopyrightPolicy,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::TermsAndConditions,
        Category::PrivacyPolicy,
        Category::AccessibilityStatement,
        Category::CookiePolicy,
        Category::AiUsagePolicy,
        Category::RefundPolicy,
        Category::CopyrightPolicy,
    ];

    /// Stable identifier used as the report key.
    pub fn id(self) -> &'static str {
        match self {
            Category::TermsAndConditions => "R01_terms_and_conditions",
            Category::PrivacyPolicy => "R02_privacy_policy",
            Category::AccessibilityStatement => "R03_ada_acc_statement",
            Category::CookiePolicy => "R04_cookie_usage_policy",
            Category::AiUsagePolicy => "R05_ai_usage_policy_disclaimer",
            Category::RefundPolicy => "R06_refund_and_return_policy",
            Category::CopyrightPolicy => "R07_dmca_slash_copyright_policy",
        }
    }

    /// Human-readable description, also used in the oracle prompt.
    pub fn description(self) -> &'static str {
        match self {
            Category::TermsAndConditions => "Terms of Service, User Agreement, etc.",
            Category::PrivacyPolicy => "Privacy Policy, Data Protection, etc.",
            Category::AccessibilityStatement => "Accessibility Statement, ADA Compliance, WCAG",
            Category::CookiePolicy => "Cookie Policy, Tracking Notice",
            Category::AiUsagePolicy => "AI Usage Policy, AI Disclosure",
            Category::RefundPolicy => "Refund Policy, Return Policy, Cancellation",
            Category::CopyrightPolicy => "DMCA, Copyright Policy, IP Policy",
        }
    }

    /// Recognized phrases, in match order.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Category::TermsAndConditions => &[
                "terms",
                "terms of service",
                "terms and conditions",
                "terms of use",
                "tos",
                "user agreement",
                "service agreement",
            ],
            Category::PrivacyPolicy => &[
                "privacy",
                "privacy policy",
                "privacy notice",
                "data policy",
                "data protection",
                "privacy statement",
            ],
            Category::AccessibilityStatement => &[
                "accessibility",
                "ada",
                "accessibility statement",
                "wcag",
                "accessible",
                "disability",
                "a11y",
            ],
            Category::CookiePolicy => &[
                "cookie",
                "cookies",
                "cookie policy",
                "cookie notice",
                "cookie preferences",
                "tracking",
            ],
            Category::AiUsagePolicy => &[
                "ai policy",
                "ai disclaimer",
                "artificial intelligence",
                "ai usage",
                "machine learning",
                "automated decision",
                "ai disclosure",
            ],
            Category::RefundPolicy => &[
                "refund",
                "return",
                "returns",
                "refund policy",
                "return policy",
                "money back",
                "cancellation",
                "exchange policy",
            ],
            Category::CopyrightPolicy => &[
                "dmca",
                "copyright",
                "intellectual property",
                "ip policy",
                "copyright notice",
                "takedown",
                "infringement",
            ],
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_id(s.trim()).ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Substrings that mark an anchor as a plausible legal document link.
pub const LEGAL_KEYWORDS: &[&str] = &[
    "terms",
    "privacy",
    "legal",
    "policy",
    "cookie",
    "accessibility",
    "refund",
    "return",
    "dmca",
    "copyright",
    "disclaimer",
    "ai",
    "conditions",
    "notice",
    "compliance",
    "gdpr",
];

/// Conventional locations probed on every site, relative to its origin.
pub const CONVENTIONAL_PATHS: &[&str] = &[
    "/terms",
    "/terms-of-service",
    "/tos",
    "/terms-and-conditions",
    "/privacy",
    "/privacy-policy",
    "/accessibility",
    "/ada",
    "/cookies",
    "/cookie-policy",
    "/refund",
    "/refund-policy",
    "/returns",
    "/dmca",
    "/copyright",
    "/legal",
    "/policies",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(Category::from_id("unknown"), None);
        assert!("R08_other".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Category::AiUsagePolicy).unwrap();
        assert_eq!(json, "\"R05_ai_usage_policy_disclaimer\"");
        let parsed: Category = serde_json::from_str("\"R02_privacy_policy\"").unwrap();
        assert_eq!(parsed, Category::PrivacyPolicy);
    }

    #[test]
    fn test_declaration_order_is_report_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::ALL.iter().all(|c| !c.patterns().is_empty()));
    }
}
