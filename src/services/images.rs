/// Placeholder image service used for every thumbnail and avatar
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/seed";

pub const THUMBNAIL_SIZE: (u32, u32) = (640, 360);
pub const CHANNEL_AVATAR_SIZE: (u32, u32) = (100, 100);
pub const COMMENT_AVATAR_SIZE: (u32, u32) = (50, 50);

/// Seed used when the source text is empty
pub const EMPTY_SEED: &str = "anonymous";

/// Percent-encode a seed as a single path segment
///
/// Distinct inputs stay distinct. Dot-only seeds have their dots escaped so they
/// never act as `.`/`..` path segments.
pub fn encode_seed(seed: &str) -> String {
    if seed.is_empty() {
        return EMPTY_SEED.to_string();
    }

    let encoded = urlencoding::encode(seed).into_owned();
    if encoded.chars().all(|c| c == '.') {
        encoded.replace('.', "%2E")
    } else {
        encoded
    }
}

/// Deterministic placeholder image URL for `seed` at the given size
pub fn placeholder_image(seed: &str, (width, height): (u32, u32)) -> String {
    format!(
        "{}/{}/{}/{}",
        PLACEHOLDER_IMAGE_BASE,
        encode_seed(seed),
        width,
        height
    )
}
