//! CSS Styler level definitions
//!
//! A level offers a palette of CSS declarations; the target is a map of
//! declarations the design calls for. Targets with a `sel:prop` key apply
//! to a nested selector rather than the element itself.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Difficulty;

/// A clickable CSS declaration in the palette
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssProperty {
    pub id: &'static str,
    pub property: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// One styler level
#[derive(Debug, Clone, Serialize)]
pub struct StylerLevel {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub html: &'static str,
    pub target_image: &'static str,
    pub difficulty: Difficulty,
    pub available_properties: Vec<CssProperty>,
    /// Target declarations as (key, value); `sel:prop` keys are nested
    pub target_css: Vec<(&'static str, &'static str)>,
    pub hints: Vec<&'static str>,
    pub xp_reward: u32,
}

/// Client-request hints surfaced when a check falls below the threshold
pub static CLIENT_REQUESTS: &[&str] = &[
    "Can you make the colors more vibrant?",
    "The spacing doesn't look right yet.",
    "Try adjusting the font styles.",
    "Consider adding some rounded corners!",
    "The layout needs to be more balanced.",
];

pub static STYLER_LEVELS: Lazy<Vec<StylerLevel>> = Lazy::new(|| {
    vec![
        StylerLevel {
            id: 1,
            title: "Style a Button",
            description: "Apply CSS properties to style a button according to the design.",
            html: "<button class=\"target-element\">Click Me</button>",
            target_image: "A blue button with rounded corners and white text",
            difficulty: Difficulty::Beginner,
            available_properties: vec![
                CssProperty {
                    id: "bg1",
                    property: "background-color",
                    value: "#3b82f6",
                    description: "Background color",
                },
                CssProperty {
                    id: "color1",
                    property: "color",
                    value: "white",
                    description: "Text color",
                },
                CssProperty {
                    id: "padding1",
                    property: "padding",
                    value: "10px 20px",
                    description: "Inner spacing",
                },
                CssProperty {
                    id: "border1",
                    property: "border",
                    value: "none",
                    description: "Border style",
                },
                CssProperty {
                    id: "radius1",
                    property: "border-radius",
                    value: "4px",
                    description: "Rounded corners",
                },
                CssProperty {
                    id: "cursor1",
                    property: "cursor",
                    value: "pointer",
                    description: "Change cursor on hover",
                },
            ],
            target_css: vec![
                ("background-color", "#3b82f6"),
                ("color", "white"),
                ("padding", "10px 20px"),
                ("border", "none"),
                ("border-radius", "4px"),
                ("cursor", "pointer"),
            ],
            hints: vec![
                "Start with background and text colors",
                "Add padding for size",
                "Round the corners with border-radius",
            ],
            xp_reward: 50,
        },
        StylerLevel {
            id: 2,
            title: "Create a Card",
            description: "Style a content card with proper spacing, shadows, and typography.",
            html: "<div class=\"target-element\">\n  <h2>Card Title</h2>\n  <p>This is some card content that needs styling.</p>\n  <a href=\"#\">Read more</a>\n</div>",
            target_image: "A white card with shadow, padding, and styled typography",
            difficulty: Difficulty::Intermediate,
            available_properties: vec![
                CssProperty {
                    id: "bg2",
                    property: "background-color",
                    value: "white",
                    description: "Background color",
                },
                CssProperty {
                    id: "padding2",
                    property: "padding",
                    value: "20px",
                    description: "Inner spacing",
                },
                CssProperty {
                    id: "shadow2",
                    property: "box-shadow",
                    value: "0 4px 6px rgba(0,0,0,0.1)",
                    description: "Box shadow",
                },
                CssProperty {
                    id: "radius2",
                    property: "border-radius",
                    value: "8px",
                    description: "Rounded corners",
                },
                CssProperty {
                    id: "mtitle2",
                    property: "margin-bottom: 10px",
                    value: "h2",
                    description: "Title margin",
                },
                CssProperty {
                    id: "ftitle2",
                    property: "font-size: 1.5rem",
                    value: "h2",
                    description: "Title font size",
                },
                CssProperty {
                    id: "clink2",
                    property: "color: #3b82f6",
                    value: "a",
                    description: "Link color",
                },
            ],
            target_css: vec![
                ("background-color", "white"),
                ("padding", "20px"),
                ("box-shadow", "0 4px 6px rgba(0,0,0,0.1)"),
                ("border-radius", "8px"),
                ("h2:margin-bottom", "10px"),
                ("h2:font-size", "1.5rem"),
                ("a:color", "#3b82f6"),
            ],
            hints: vec![
                "Start with card container styles",
                "Add spacing between elements",
                "Style title and link differently",
            ],
            xp_reward: 75,
        },
        StylerLevel {
            id: 3,
            title: "Flexbox Layout",
            description: "Create a responsive navbar using flexbox properties.",
            html: "<nav class=\"target-element\">\n  <div class=\"logo\">LOGO</div>\n  <ul class=\"menu\">\n    <li><a href=\"#\">Home</a></li>\n    <li><a href=\"#\">About</a></li>\n    <li><a href=\"#\">Services</a></li>\n    <li><a href=\"#\">Contact</a></li>\n  </ul>\n</nav>",
            target_image: "A horizontal navbar with logo on left and menu items on right",
            difficulty: Difficulty::Advanced,
            available_properties: vec![
                CssProperty {
                    id: "display3",
                    property: "display",
                    value: "flex",
                    description: "Flex container",
                },
                CssProperty {
                    id: "justify3",
                    property: "justify-content",
                    value: "space-between",
                    description: "Space between items",
                },
                CssProperty {
                    id: "align3",
                    property: "align-items",
                    value: "center",
                    description: "Center items vertically",
                },
                CssProperty {
                    id: "padding3",
                    property: "padding",
                    value: "1rem 2rem",
                    description: "Inner spacing",
                },
                CssProperty {
                    id: "bg3",
                    property: "background-color",
                    value: "#f8f9fa",
                    description: "Background color",
                },
                CssProperty {
                    id: "uldisplay3",
                    property: "display: flex",
                    value: "ul",
                    description: "Menu as flex container",
                },
                CssProperty {
                    id: "ulgap3",
                    property: "gap: 1.5rem",
                    value: "ul",
                    description: "Space between menu items",
                },
                CssProperty {
                    id: "lilist3",
                    property: "list-style: none",
                    value: "li",
                    description: "Remove list bullets",
                },
                CssProperty {
                    id: "acolor3",
                    property: "color: #4b5563",
                    value: "a",
                    description: "Link color",
                },
                CssProperty {
                    id: "adecor3",
                    property: "text-decoration: none",
                    value: "a",
                    description: "Remove underline",
                },
            ],
            target_css: vec![
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("align-items", "center"),
                ("padding", "1rem 2rem"),
                ("background-color", "#f8f9fa"),
                ("ul:display", "flex"),
                ("ul:gap", "1.5rem"),
                ("li:list-style", "none"),
                ("a:color", "#4b5563"),
                ("a:text-decoration", "none"),
            ],
            hints: vec![
                "Use display: flex on both nav and ul",
                "Space logo and menu with justify-content",
                "Style list items to remove bullets",
            ],
            xp_reward: 100,
        },
    ]
});
