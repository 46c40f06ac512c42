use md5::{Digest, Md5};
use url::Url;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Background colours, indexed by the leading nibble of the name's MD5.
pub const AVATAR_PALETTE: [&str; 8] = [
    "3B82F6", "10B981", "8B5CF6", "F59E0B", "EF4444", "6366F1", "EC4899", "14B8A6",
];

/// First letter of each of the first two words, uppercased.
pub fn company_initials(company_name: &str) -> String {
    company_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn avatar_initials(company_name: &str) -> String {
    let initials = company_initials(company_name);
    if !initials.is_empty() {
        return initials;
    }
    company_name.chars().take(2).flat_map(char::to_uppercase).collect()
}

pub fn avatar_color(company_name: &str) -> &'static str {
    let digest = Md5::digest(company_name.as_bytes());
    let index = usize::from(digest[0] >> 4) % AVATAR_PALETTE.len();
    AVATAR_PALETTE[index]
}

/// Builds avatar URLs against a configurable rendering endpoint.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    base_url: Url,
}

impl PlaceholderGenerator {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn generate(&self, company_name: &str) -> String {
        let initials = avatar_initials(company_name);
        let mut url = self.base_url.clone();
        // Query is form-encoded: non-ASCII initials become UTF-8 percent
        // escapes, a space becomes `+`.
        url.query_pairs_mut()
            .append_pair("name", &initials)
            .append_pair("background", avatar_color(company_name))
            .append_pair("color", "fff")
            .append_pair("size", "128")
            .append_pair("rounded", "true")
            .append_pair("bold", "true");
        url.into()
    }
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_AVATAR_BASE_URL)
                .expect("default avatar URL is valid"),
        }
    }
}

/// Avatar URL on the public ui-avatars endpoint.
pub fn generate_initials_avatar(company_name: &str) -> String {
    PlaceholderGenerator::default().generate(company_name)
}
