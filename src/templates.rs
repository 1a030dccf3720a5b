//! Planner template catalog
//!
//! Templates are purely presentational; the generator never reads them.

use crate::types::PlannerTemplate;

/// (id, name, description, color)
const CATALOG: [(&str, &str, &str, &str); 4] = [
    (
        "professional",
        "Professional",
        "Clean and structured for office work",
        "from-blue-500 to-indigo-600",
    ),
    (
        "creative",
        "Creative",
        "Colorful and inspiring for creative work",
        "from-purple-500 to-pink-600",
    ),
    (
        "minimal",
        "Minimal",
        "Simple and focused design",
        "from-gray-500 to-slate-600",
    ),
    (
        "wellness",
        "Wellness Focus",
        "Emphasizes health and wellbeing",
        "from-green-500 to-emerald-600",
    ),
];

fn to_template(entry: &(&str, &str, &str, &str)) -> PlannerTemplate {
    let (id, name, description, color) = *entry;
    PlannerTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    }
}

/// All templates, in catalog order
pub fn list_templates() -> Vec<PlannerTemplate> {
    CATALOG.iter().map(to_template).collect()
}

/// Find a template by id
pub fn find_template(id: &str) -> Option<PlannerTemplate> {
    CATALOG.iter().find(|entry| entry.0 == id).map(to_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<String> = list_templates().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["professional", "creative", "minimal", "wellness"]);
    }

    #[test]
    fn test_wellness_entry() {
        assert_eq!(
            find_template("wellness"),
            Some(PlannerTemplate {
                id: "wellness".to_string(),
                name: "Wellness Focus".to_string(),
                description: "Emphasizes health and wellbeing".to_string(),
                color: "from-green-500 to-emerald-600".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_template() {
        assert!(find_template("retro").is_none());
        assert!(find_template("Professional").is_none());
    }
}
