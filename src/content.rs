use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

use crate::slider::{Slide, SliderConfig};

const SITE_FILE: &str = "site.json";

static GLOBAL_SITE: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(load_site);
#[cfg(feature = "ssr")]
pub static GLOBAL_PAGE_CACHE: LazyLock<DashMap<String, About>> = LazyLock::new(DashMap::new);

/// Structured content. Rendered on both sides, so it is embedded in the wasm
/// bundle as well.
#[derive(Embed)]
#[folder = "content/site"]
pub struct SiteAssets;

/// Long-form markdown pages, only read on the server.
#[derive(Embed)]
#[folder = "content/pages"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct PageAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub navigation: Vec<NavLink>,
    pub social: Vec<SocialLink>,
    pub hero: HeroContent,
    pub sections: Sections,
    pub services: ServicesContent,
    pub skills: Vec<SkillCategory>,
    pub projects: ProjectsContent,
    pub testimonials: TestimonialsContent,
    pub contact: ContactInfo,
    pub scheduling: Scheduling,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Twitter,
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub greeting: String,
    pub name: String,
    pub roles: Vec<String>,
    #[serde(default = "default_rotation_ms")]
    pub rotation_ms: u64,
    pub summary: String,
    pub primary: Cta,
    pub secondary: Cta,
}

fn default_rotation_ms() -> u64 {
    2500
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMeta {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub about: SectionMeta,
    pub services: SectionMeta,
    pub skills: SectionMeta,
    pub projects: SectionMeta,
    pub testimonials: SectionMeta,
    pub contact: SectionMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub tools: Vec<String>,
    /// Accent colour as a hex string.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesContent {
    pub items: Vec<Service>,
    pub pitch_title: String,
    pub pitch: Vec<String>,
    pub cta: Cta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    level: u8,
}

impl Skill {
    /// Proficiency in percent, never above 100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub items: Vec<Project>,
}

impl ProjectsContent {
    /// Every tag once, in order of first appearance.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.items.iter().flat_map(|p| p.tags.iter()) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    /// `None` keeps every project.
    pub fn filtered(&self, tag: Option<&str>) -> Vec<Project> {
        self.items
            .iter()
            .filter(|p| tag.is_none_or(|t| p.has_tag(t)))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    rating: u8,
    pub avatar: Option<String>,
}

impl Testimonial {
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }

    /// Initials shown when there is no avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    #[serde(default)]
    pub slider: SliderConfig,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduling {
    /// Public booking page, also the fallback when the widget can't load.
    pub url: String,
    pub script_url: String,
    pub label: String,
}

pub fn load_site() -> Result<SiteContent, ContentError> {
    let file = SiteAssets::get(SITE_FILE).ok_or(ContentError::NotFound(SITE_FILE.to_string()))?;
    parse_site(&file.data)
}

fn parse_site(data: &[u8]) -> Result<SiteContent, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: SITE_FILE.to_string(),
        reason: e.to_string(),
    })
}

/// The embedded site content, parsed on first use.
pub fn site() -> Result<&'static SiteContent, ContentError> {
    GLOBAL_SITE.as_ref().map_err(Clone::clone)
}

/// Year the binary was built. Server and client agree on it, unlike the
/// wall clock.
pub fn build_year() -> i32 {
    build_time().map_or(2025, |t| t.year())
}

fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub headline: String,
    pub portrait: String,
    pub portrait_fallback: String,
    pub resume: String,
    pub html: String,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct AboutFrontMatter {
    headline: String,
    portrait: String,
    portrait_fallback: String,
    resume: String,
}

#[cfg(feature = "ssr")]
pub fn get_page(name: &str) -> Result<About, ContentError> {
    if let Some(page) = GLOBAL_PAGE_CACHE.get(name) {
        return Ok(page.clone());
    }
    let file = format!("{name}.md");
    let data = PageAssets::get(&file).ok_or_else(|| ContentError::NotFound(file.clone()))?;
    let text = String::from_utf8(data.data.into()).map_err(|e| ContentError::Parse {
        file: file.clone(),
        reason: e.to_string(),
    })?;
    let page = render_page(&file, &text)?;
    GLOBAL_PAGE_CACHE.insert(name.to_string(), page.clone());
    Ok(page)
}

#[cfg(feature = "ssr")]
fn render_page(file: &str, text: &str) -> Result<About, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<AboutFrontMatter>(text)
        .ok_or_else(|| ContentError::Parse {
            file: file.to_string(),
            reason: "missing or invalid front matter".to_string(),
        })?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    Ok(About {
        headline: parsed.data.headline,
        portrait: parsed.data.portrait,
        portrait_fallback: parsed.data.portrait_fallback,
        resume: parsed.data.resume,
        html,
    })
}
