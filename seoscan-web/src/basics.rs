use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Acceptable `<title>` length in characters.
pub const TITLE_LENGTH_RANGE: RangeInclusive<usize> = 30..=60;

/// Acceptable meta description length in characters.
pub const DESCRIPTION_LENGTH_RANGE: RangeInclusive<usize> = 120..=160;

// Single-line patterns: `.` does not cross newlines here.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").expect("valid regex"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta name="description" content="(.*?)""#).expect("valid regex")
});
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<link rel="canonical" href="(.*?)""#).expect("valid regex"));
static OG_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta property="og:image" content="(.*?)""#).expect("valid regex")
});
static ROBOTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<meta name="robots" content="(.*?)""#).expect("valid regex"));

/// Whether a measured length sits inside its recommended range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthVerdict {
    Pass,
    Warn,
}

impl LengthVerdict {
    pub fn for_length(length: usize, range: &RangeInclusive<usize>) -> Self {
        if range.contains(&length) {
            Self::Pass
        } else {
            Self::Warn
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCheck {
    pub text: String,
    /// Character count of `text`, not bytes.
    pub length: usize,
}

impl TitleCheck {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            length: text.chars().count(),
        }
    }

    pub fn verdict(&self) -> LengthVerdict {
        LengthVerdict::for_length(self.length, &TITLE_LENGTH_RANGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionCheck {
    pub text: String,
    /// Character count of `text`, not bytes.
    pub length: usize,
}

impl DescriptionCheck {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            length: text.chars().count(),
        }
    }

    pub fn verdict(&self) -> LengthVerdict {
        LengthVerdict::for_length(self.length, &DESCRIPTION_LENGTH_RANGE)
    }
}

/// Tag-level SEO signals found in one document.
///
/// Each field is `None` when its pattern did not match, so derived values
/// exist exactly when the corresponding `has_*` accessor is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoChecks {
    pub title: Option<TitleCheck>,
    pub description: Option<DescriptionCheck>,
    pub canonical_url: Option<String>,
    pub og_image_url: Option<String>,
    pub robots_content: Option<String>,
}

impl SeoChecks {
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn has_meta_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn has_canonical(&self) -> bool {
        self.canonical_url.is_some()
    }

    pub fn has_og_image(&self) -> bool {
        self.og_image_url.is_some()
    }

    pub fn has_robots_meta(&self) -> bool {
        self.robots_content.is_some()
    }
}

/// Flat mapping: every `has_*` flag, plus derived keys only when present.
impl Serialize for SeoChecks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("has_title", &self.has_title())?;
        if let Some(title) = &self.title {
            map.serialize_entry("title_length", &title.length)?;
            map.serialize_entry("title_text", &title.text)?;
        }

        map.serialize_entry("has_meta_description", &self.has_meta_description())?;
        if let Some(desc) = &self.description {
            map.serialize_entry("description_length", &desc.length)?;
            map.serialize_entry("description_text", &desc.text)?;
        }

        map.serialize_entry("has_canonical", &self.has_canonical())?;
        if let Some(url) = &self.canonical_url {
            map.serialize_entry("canonical_url", url)?;
        }

        map.serialize_entry("has_og_image", &self.has_og_image())?;
        if let Some(url) = &self.og_image_url {
            map.serialize_entry("og_image_url", url)?;
        }

        map.serialize_entry("has_robots_meta", &self.has_robots_meta())?;
        if let Some(content) = &self.robots_content {
            map.serialize_entry("robots_content", content)?;
        }

        map.end()
    }
}

fn first_capture<'h>(re: &Regex, html: &'h str, check: &'static str) -> Option<&'h str> {
    let found = re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str());
    if found.is_none() {
        tracing::debug!(check, "tag not found");
    }
    found
}

/// Run the five tag checks against `html`.
///
/// Every check runs regardless of the others and only the first match of
/// each pattern counts. Captured text is kept exactly as written: no
/// trimming and no entity decoding.
pub fn check_seo_basics(html: &str) -> SeoChecks {
    SeoChecks {
        title: first_capture(&TITLE_RE, html, "title").map(TitleCheck::new),
        description: first_capture(&DESCRIPTION_RE, html, "meta_description")
            .map(DescriptionCheck::new),
        canonical_url: first_capture(&CANONICAL_RE, html, "canonical").map(str::to_string),
        og_image_url: first_capture(&OG_IMAGE_RE, html, "og_image").map(str::to_string),
        robots_content: first_capture(&ROBOTS_RE, html, "robots_meta").map(str::to_string),
    }
}
