//! Tech path and technology definitions for the tech selection screen

use once_cell::sync::Lazy;
use serde::Serialize;

use super::GameKind;

/// A selectable technology within a path
#[derive(Debug, Clone, Serialize)]
pub struct Technology {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Mini-game this technology jumps to directly, if any
    pub game: Option<GameKind>,
}

/// A top-level learning track
#[derive(Debug, Clone, Serialize)]
pub struct TechPath {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub technologies: Vec<Technology>,
}

pub static TECH_PATHS: Lazy<Vec<TechPath>> = Lazy::new(|| {
    vec![
        TechPath {
            id: "web",
            name: "Web Development",
            description: "Learn to build responsive websites and web applications",
            icon: "\u{1F310}",
            technologies: vec![
                Technology {
                    id: "html-css",
                    name: "HTML & CSS",
                    icon: "\u{1F310}",
                    description: "The building blocks of the web",
                    game: Some(GameKind::HtmlBlueprint),
                },
                Technology {
                    id: "javascript",
                    name: "JavaScript",
                    icon: "\u{1F4DC}",
                    description: "Add interactivity to your websites",
                    game: Some(GameKind::JsCommander),
                },
                Technology {
                    id: "react",
                    name: "React",
                    icon: "\u{269B}",
                    description: "Build modern user interfaces",
                    game: None,
                },
                Technology {
                    id: "nextjs",
                    name: "Next.js",
                    icon: "\u{25B2}",
                    description: "Full-stack React framework",
                    game: None,
                },
            ],
        },
        TechPath {
            id: "mobile",
            name: "Mobile Development",
            description: "Create apps for iOS and Android devices",
            icon: "\u{1F4F1}",
            technologies: vec![
                Technology {
                    id: "react-native",
                    name: "React Native",
                    icon: "\u{1F4F1}",
                    description: "Cross-platform mobile apps with React",
                    game: Some(GameKind::ReactNativeRanger),
                },
                Technology {
                    id: "flutter",
                    name: "Flutter",
                    icon: "\u{1F98B}",
                    description: "Google's UI toolkit for mobile",
                    game: Some(GameKind::FlutterForge),
                },
                Technology {
                    id: "swift",
                    name: "Swift",
                    icon: "\u{1F34E}",
                    description: "Native iOS development",
                    game: None,
                },
                Technology {
                    id: "kotlin",
                    name: "Kotlin",
                    icon: "\u{1F916}",
                    description: "Modern Android development",
                    game: None,
                },
            ],
        },
        TechPath {
            id: "backend",
            name: "Backend Development",
            description: "Build APIs, servers, and application logic",
            icon: "\u{1F5A5}",
            technologies: vec![
                Technology {
                    id: "nodejs",
                    name: "Node.js",
                    icon: "\u{1F7E2}",
                    description: "JavaScript runtime for server-side development",
                    game: None,
                },
                Technology {
                    id: "python",
                    name: "Python",
                    icon: "\u{1F40D}",
                    description: "Versatile language for backends and more",
                    game: None,
                },
                Technology {
                    id: "java",
                    name: "Java",
                    icon: "\u{2615}",
                    description: "Enterprise-grade backend development",
                    game: None,
                },
                Technology {
                    id: "golang",
                    name: "Go",
                    icon: "\u{1F439}",
                    description: "Fast, statically typed language",
                    game: None,
                },
            ],
        },
        TechPath {
            id: "data",
            name: "Data Science",
            description: "Analyze data and build machine learning models",
            icon: "\u{1F5C4}",
            technologies: vec![
                Technology {
                    id: "python-data",
                    name: "Python for Data",
                    icon: "\u{1F4CA}",
                    description: "Python with pandas, NumPy, and more",
                    game: None,
                },
                Technology {
                    id: "sql",
                    name: "SQL",
                    icon: "\u{1F5C4}",
                    description: "Query and manipulate databases",
                    game: None,
                },
                Technology {
                    id: "tableau",
                    name: "Tableau",
                    icon: "\u{1F4C8}",
                    description: "Data visualization and analytics",
                    game: None,
                },
                Technology {
                    id: "r",
                    name: "R",
                    icon: "\u{1F4C9}",
                    description: "Statistical computing and graphics",
                    game: None,
                },
            ],
        },
        TechPath {
            id: "ai",
            name: "AI & Machine Learning",
            description: "Build intelligent systems and models",
            icon: "\u{1F9E0}",
            technologies: vec![
                Technology {
                    id: "ml-basics",
                    name: "ML Fundamentals",
                    icon: "\u{1F9E0}",
                    description: "Core concepts of machine learning",
                    game: None,
                },
                Technology {
                    id: "tensorflow",
                    name: "TensorFlow",
                    icon: "\u{1F522}",
                    description: "Google's ML framework",
                    game: None,
                },
                Technology {
                    id: "pytorch",
                    name: "PyTorch",
                    icon: "\u{1F525}",
                    description: "Facebook's ML framework",
                    game: None,
                },
                Technology {
                    id: "nlp",
                    name: "NLP",
                    icon: "\u{1F4AC}",
                    description: "Natural language processing",
                    game: None,
                },
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_paths_four_technologies_each() {
        assert_eq!(TECH_PATHS.len(), 5);
        for path in TECH_PATHS.iter() {
            assert_eq!(path.technologies.len(), 4, "path {}", path.id);
        }
    }

    #[test]
    fn test_game_links_present() {
        let linked: Vec<_> = TECH_PATHS
            .iter()
            .flat_map(|p| p.technologies.iter())
            .filter_map(|t| t.game)
            .collect();
        assert!(linked.contains(&GameKind::HtmlBlueprint));
        assert!(linked.contains(&GameKind::JsCommander));
        assert!(linked.contains(&GameKind::ReactNativeRanger));
        assert!(linked.contains(&GameKind::FlutterForge));
    }
}
