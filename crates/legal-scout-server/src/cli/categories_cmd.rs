//! `legal-scout categories`: list the taxonomy.

use crate::cli::output::{self, Styled};
use legal_scout::Category;
use serde_json::json;

pub fn run(json_only: bool) {
    if json_only {
        output::print_json(&taxonomy_json());
        return;
    }

    let s = Styled::new();
    for category in Category::ALL {
        output::print_section(&s, category.id());
        eprintln!("    {}", s.dim(category.description()));
        eprintln!("    {}", category.patterns().join(", "));
        eprintln!();
    }
}

fn taxonomy_json() -> serde_json::Value {
    Category::ALL
        .iter()
        .map(|c| {
            json!({
                "id": c.id(),
                "description": c.description(),
                "patterns": c.patterns(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_json() {
        let value = taxonomy_json();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 7);
        assert_eq!(list[0]["id"], "R01_terms_and_conditions");
        assert_eq!(list[6]["patterns"][0], "dmca");
    }
}
