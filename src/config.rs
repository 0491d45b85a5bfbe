//! Build-time configuration for the hosted Supabase project.
//!
//! The site has no server of its own; both forms write straight to hosted
//! tables and all media is served from the project's public storage bucket.
//! Override the defaults at build time with `SUPABASE_URL` /
//! `SUPABASE_ANON_KEY`.

const DEFAULT_SUPABASE_URL: &str = "https://frdmalzedskscaopornt.supabase.co";
const DEFAULT_ANON_KEY: &str = "public-anon-key";

pub fn get_supabase_url() -> String {
    option_env!("SUPABASE_URL")
        .unwrap_or(DEFAULT_SUPABASE_URL)
        .trim_end_matches('/')
        .to_string()
}

pub fn get_supabase_anon_key() -> String {
    option_env!("SUPABASE_ANON_KEY")
        .unwrap_or(DEFAULT_ANON_KEY)
        .to_string()
}

/// Public URL of a file in the media bucket (images and audio).
pub fn media_url(file: &str) -> String {
    format!(
        "{}/storage/v1/object/public/media/{}",
        get_supabase_url(),
        file
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supabase_url_has_no_trailing_slash() {
        assert!(!get_supabase_url().ends_with('/'));
    }

    #[test]
    fn media_url_points_into_public_bucket() {
        let url = media_url("music/backdrop.mp3");
        assert!(url.starts_with(&get_supabase_url()));
        assert!(url.contains("/storage/v1/object/public/media/music/backdrop.mp3"));
    }
}
