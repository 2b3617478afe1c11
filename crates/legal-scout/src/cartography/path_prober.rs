//! Synthesize candidates for conventional legal paths.

use super::{Candidate, CandidateOrigin};
use crate::taxonomy::CONVENTIONAL_PATHS;
use std::collections::HashSet;
use url::Url;

/// Candidates for every conventional path on `base`'s origin that is not
/// already among `existing`.
///
/// Probed candidates are not fetched here; a path that does not exist is
/// dropped later for lack of content.
pub fn probe_paths(base: &Url, existing: &[Candidate]) -> Vec<Candidate> {
    let known: HashSet<&str> = existing.iter().map(|c| c.url.as_str()).collect();
    let mut probes = Vec::new();

    for path in CONVENTIONAL_PATHS {
        let Ok(url) = base.join(path) else {
            continue;
        };
        let url = url.to_string();
        if known.contains(url.as_str()) {
            continue;
        }
        probes.push(Candidate {
            text: display_text(path),
            href: path.to_string(),
            url,
            origin: CandidateOrigin::Probe,
        });
    }

    probes
}

/// `/terms-of-service` -> `Terms Of Service`.
pub fn display_text(path: &str) -> String {
    title_case(&path.trim_matches('/').replace('-', " "))
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
