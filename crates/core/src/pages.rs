//! Typed per-page SEO metadata.
//!
//! Replaces the string-keyed metadata dictionaries of the original site with
//! a static table keyed by [`PageId`], plus an override path for dynamically
//! titled pages (blog and portfolio detail views).

use serde::Serialize;

/// Site name used in composed page titles.
pub const SITE_NAME: &str = "Vitrine Studio";

/// Identifier for each templated page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Services,
    Portfolio,
    Contact,
    Feedback,
    Blog,
}

impl PageId {
    /// Parse a page identifier from its URL segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "home" => Some(PageId::Home),
            "services" => Some(PageId::Services),
            "portfolio" => Some(PageId::Portfolio),
            "contact" => Some(PageId::Contact),
            "feedback" => Some(PageId::Feedback),
            "blog" => Some(PageId::Blog),
            _ => None,
        }
    }
}

/// SEO metadata handed to the template renderer for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Static metadata for a fixed page.
pub fn page_meta(page: PageId) -> PageMeta {
    let (title, description, keywords) = match page {
        PageId::Home => (
            "Vitrine Studio | Design & Build",
            "Small design and build studio: renovations, landscaping, and custom interiors.",
            "design, build, renovation, studio",
        ),
        PageId::Services => (
            "Services | Vitrine Studio",
            "Renovation, landscaping, and interior services with transparent pricing.",
            "services, renovation, landscaping, interiors",
        ),
        PageId::Portfolio => (
            "Portfolio | Vitrine Studio",
            "Selected projects: photos and videos of completed work by category.",
            "portfolio, projects, gallery",
        ),
        PageId::Contact => (
            "Contact | Vitrine Studio",
            "Get in touch for a free quote.",
            "contact, quote, email, phone",
        ),
        PageId::Feedback => (
            "Feedback | Vitrine Studio",
            "Read client feedback and leave your own.",
            "feedback, reviews, ratings",
        ),
        PageId::Blog => (
            "Blog | Vitrine Studio",
            "Notes from recent projects and studio news.",
            "blog, news, projects",
        ),
    };
    PageMeta {
        title: title.to_string(),
        description: description.to_string(),
        keywords: keywords.to_string(),
    }
}

/// Metadata for a dynamically titled detail page (blog post, portfolio item):
/// the base page's description/keywords with a composed `"{title} | {site}"`
/// title.
pub fn detail_meta(base: PageId, item_title: &str) -> PageMeta {
    let mut meta = page_meta(base);
    meta.title = format!("{item_title} | {SITE_NAME}");
    meta
}
