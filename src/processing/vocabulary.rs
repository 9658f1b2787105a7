//! Static keyword tables shared by the extractors

/// Lowercase keyword -> canonical skill name, in match priority order
pub const SKILL_VOCABULARY: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("c++", "C++"),
    ("c#", "C#"),
    ("react", "React"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("node.js", "Node.js"),
    ("nodejs", "Node.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("git", "Git"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("machine learning", "Machine Learning"),
    ("tensorflow", "TensorFlow"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
    ("devops", "DevOps"),
];

/// Lowercase city keyword -> canonical region. The first entry that matches wins.
pub const CITY_TABLE: &[(&str, &str)] = &[
    ("bangalore", "Bangalore"),
    ("bengaluru", "Bangalore"),
    ("hyderabad", "Hyderabad"),
    ("pune", "Pune"),
    ("mumbai", "Mumbai"),
    ("delhi", "Delhi NCR"),
    ("noida", "Delhi NCR"),
    ("gurgaon", "Delhi NCR"),
    ("chennai", "Chennai"),
    ("kolkata", "Kolkata"),
    ("ahmedabad", "Ahmedabad"),
    ("jaipur", "Jaipur"),
    ("kochi", "Kochi"),
    ("indore", "Indore"),
];

pub const LOCATION_NOT_SPECIFIED: &str = "Not specified";

/// Skills checked by plain substring when explaining a semantic score
pub const SEMANTIC_GAP_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "nodejs",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "data analysis",
    "ai",
];
