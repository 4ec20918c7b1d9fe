pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keyword groups checked in order; the first group with a substring hit names the category.
const CATEGORY_KEYWORDS: [(&str, &[&str]); 7] = [
    (
        "Programming",
        &["python", "java", "javascript", "c++", "c#", "typescript"],
    ),
    ("Frontend", &["react", "vue", "angular", "html", "css"]),
    ("Backend", &["node", "express", "django", "flask"]),
    ("Cloud", &["aws", "azure", "gcp", "cloud"]),
    ("Database", &["sql", "mongodb", "database", "data"]),
    (
        "AI/ML",
        &["machine learning", "ai", "tensorflow", "pytorch"],
    ),
    ("DevOps", &["docker", "kubernetes", "jenkins", "devops"]),
];

const FALLBACK_CATEGORY: &str = "Technical";

/// Infer a demand category from a free-text skill name.
pub(crate) fn categorize_skill(skill: &str) -> &'static str {
    let lowered = skill.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}
