//! HTML Blueprint level definitions
//!
//! Each level is a bag of draggable tags plus the correct placement order.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Difficulty;

/// A draggable HTML tag snippet
#[derive(Debug, Clone, Serialize)]
pub struct HtmlTag {
    pub id: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

/// One blueprint level
#[derive(Debug, Clone, Serialize)]
pub struct BlueprintLevel {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub target_preview: &'static str,
    pub difficulty: Difficulty,
    pub tags: Vec<HtmlTag>,
    pub correct_order: Vec<&'static str>,
    pub hints: Vec<&'static str>,
    pub xp_reward: u32,
}

pub static BLUEPRINT_LEVELS: Lazy<Vec<BlueprintLevel>> = Lazy::new(|| {
    vec![
        BlueprintLevel {
            id: 1,
            title: "Simple Blog Post",
            description: "Create a simple blog post with a heading, paragraph, and image.",
            target_preview: "A blog post with title, paragraph, and image",
            difficulty: Difficulty::Beginner,
            tags: vec![
                HtmlTag {
                    id: "h1",
                    tag: "<h1>Title</h1>",
                    description: "Main heading",
                },
                HtmlTag {
                    id: "p",
                    tag: "<p>Content</p>",
                    description: "Paragraph text",
                },
                HtmlTag {
                    id: "img",
                    tag: "<img src=\"image.jpg\" alt=\"Blog image\">",
                    description: "Image element",
                },
            ],
            correct_order: vec!["h1", "p", "img"],
            hints: vec![
                "Start with the heading",
                "Follow with paragraph content",
                "End with the image",
            ],
            xp_reward: 50,
        },
        BlueprintLevel {
            id: 2,
            title: "Navigation Menu",
            description: "Build a navigation menu with links using proper semantic HTML.",
            target_preview: "A navigation bar with home, about, and contact links",
            difficulty: Difficulty::Intermediate,
            tags: vec![
                HtmlTag {
                    id: "nav",
                    tag: "<nav>",
                    description: "Navigation container",
                },
                HtmlTag {
                    id: "ul",
                    tag: "<ul>",
                    description: "Unordered list",
                },
                HtmlTag {
                    id: "li1",
                    tag: "<li><a href=\"/\">Home</a></li>",
                    description: "List item with link",
                },
                HtmlTag {
                    id: "li2",
                    tag: "<li><a href=\"/about\">About</a></li>",
                    description: "List item with link",
                },
                HtmlTag {
                    id: "li3",
                    tag: "<li><a href=\"/contact\">Contact</a></li>",
                    description: "List item with link",
                },
                HtmlTag {
                    id: "ul-close",
                    tag: "</ul>",
                    description: "Closing unordered list",
                },
                HtmlTag {
                    id: "nav-close",
                    tag: "</nav>",
                    description: "Closing navigation",
                },
            ],
            correct_order: vec!["nav", "ul", "li1", "li2", "li3", "ul-close", "nav-close"],
            hints: vec![
                "Start with nav element",
                "Use ul for list of links",
                "Add list items with links",
                "Don't forget closing tags",
            ],
            xp_reward: 75,
        },
        BlueprintLevel {
            id: 3,
            title: "Contact Form",
            description: "Create a contact form with proper semantic HTML and accessibility features.",
            target_preview: "A contact form with name, email, and message fields",
            difficulty: Difficulty::Advanced,
            tags: vec![
                HtmlTag {
                    id: "form",
                    tag: "<form action=\"/submit\" method=\"post\">",
                    description: "Form element",
                },
                HtmlTag {
                    id: "label1",
                    tag: "<label for=\"name\">Name:</label>",
                    description: "Label for name field",
                },
                HtmlTag {
                    id: "input1",
                    tag: "<input type=\"text\" id=\"name\" name=\"name\" required>",
                    description: "Name input field",
                },
                HtmlTag {
                    id: "label2",
                    tag: "<label for=\"email\">Email:</label>",
                    description: "Label for email field",
                },
                HtmlTag {
                    id: "input2",
                    tag: "<input type=\"email\" id=\"email\" name=\"email\" required>",
                    description: "Email input field",
                },
                HtmlTag {
                    id: "label3",
                    tag: "<label for=\"message\">Message:</label>",
                    description: "Label for message field",
                },
                HtmlTag {
                    id: "textarea",
                    tag: "<textarea id=\"message\" name=\"message\" rows=\"4\" required></textarea>",
                    description: "Message textarea",
                },
                HtmlTag {
                    id: "button",
                    tag: "<button type=\"submit\">Send Message</button>",
                    description: "Submit button",
                },
                HtmlTag {
                    id: "form-close",
                    tag: "</form>",
                    description: "Closing form tag",
                },
            ],
            correct_order: vec![
                "form", "label1", "input1", "label2", "input2", "label3", "textarea", "button",
                "form-close",
            ],
            hints: vec![
                "Start with form element",
                "Each input needs a label for accessibility",
                "Add required inputs with types",
                "End with a submit button",
            ],
            xp_reward: 100,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_order_references_real_tags() {
        for level in BLUEPRINT_LEVELS.iter() {
            assert_eq!(level.correct_order.len(), level.tags.len());
            for id in &level.correct_order {
                assert!(
                    level.tags.iter().any(|t| t.id == *id),
                    "level {} references unknown tag {}",
                    level.id,
                    id
                );
            }
        }
    }
}
