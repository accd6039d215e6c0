//! Build-output inspection for a single HTML document.
//!
//! - JSON-LD block extraction and syntax validation (`structured_data`)
//! - Tag-level SEO signals with fixed length thresholds (`basics`)
//!
//! Both passes are pattern based, not DOM based: each signal is the first
//! literal match of a fixed pattern, so attribute order and quoting matter.

pub mod basics;
pub mod structured_data;

pub use basics::{
    DESCRIPTION_LENGTH_RANGE, DescriptionCheck, LengthVerdict, SeoChecks, TITLE_LENGTH_RANGE,
    TitleCheck, check_seo_basics,
};
pub use structured_data::{StructuredDataResult, extract_structured_data};
