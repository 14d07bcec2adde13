// Fixed topic taxonomy, in declaration order. The first entry is the fallback.
pub const CATEGORIES: [(&str, &str); 10] = [
    ("Education & How-To", "#3498db"),
    ("Entertainment & Comedy", "#e74c3c"),
    ("Vlogging & Lifestyle", "#9b59b6"),
    ("Tech & Reviews", "#2ecc71"),
    ("Gaming", "#f39c12"),
    ("Fitness & Health", "#1abc9c"),
    ("Finance & Business", "#f1c40f"),
    ("News & Commentary", "#34495e"),
    ("Food & Cooking", "#27ae60"),
    ("Art & Creativity", "#e67e22"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
}

impl Category {
    pub fn default_category() -> Self {
        let (name, color) = CATEGORIES[0];
        Category { name, color }
    }
}

// Part of a name before its first dash, e.g. "Education & How" for "Education & How-To"
fn main_part(name: &str) -> &str {
    name.split(['–', '-']).next().unwrap_or(name).trim()
}

// Map raw model output onto the category table.
//
// Tries whole names first, then the part of each name before a dash, both as
// case-insensitive substrings. Output matching nothing falls back to the
// first category.
pub fn resolve(output: &str) -> Category {
    let haystack = output.trim().to_lowercase();

    let whole = CATEGORIES
        .iter()
        .find(|(name, _)| haystack.contains(&name.to_lowercase()));

    let matched = whole.or_else(|| {
        CATEGORIES.iter().find(|(name, _)| {
            let main = main_part(name).to_lowercase();
            !main.is_empty() && haystack.contains(&main)
        })
    });

    match matched {
        Some(&(name, color)) => Category { name, color },
        None => {
            tracing::debug!(output = %output, "No category matched, using default");
            Category::default_category()
        }
    }
}
