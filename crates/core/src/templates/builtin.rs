//! Post templates shipped with the tool.

pub(crate) const BASIC_POST: &str = r#"Title: "{title}"
Date: {date}
Slug: {slug}
Status: draft
Tags: 
Category: Articles
Summary: ""
---

# {title}

Write your blog post content here...

## Heading
"#;

pub(crate) const NOTES_POST: &str = r#"Title: "{title}"
Date: {date}
Slug: {slug}
Status: draft
Category: Notes
summary: "Semaine du au"

# {title}

## Prerequisites
"#;

pub(crate) const BOOK_REVIEW_POST: &str = r#"Title: "{title}"
Date: {date}
Slug: {slug}
Status: draft
Tags:
Category: Books
Summary:

# {title}

## Overview

## Conclusion

**Overall Rating:** ⭐⭐⭐⭐⭐ (X/5)
"#;

/// `(name, description, content)` for every built-in template.
pub(crate) const BUILTIN_TEMPLATES: &[(&str, &str, &str)] = &[
    ("Basic Post", "A basic blog post template", BASIC_POST),
    ("Notes Post", "Template for Notes posts", NOTES_POST),
    ("Book review Post", "Template for book review", BOOK_REVIEW_POST),
];
