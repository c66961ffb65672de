// Case study 8: nullable and optional fields
//
// `bio` is always present in the data but may be null; `avatarUrl` may be
// missing altogether. Both land in `Option` and get the same fallback logic.

use serde::{Deserialize, Serialize};
use std::error::Error;

const FALLBACK_AVATAR: &str =
    "https://unsplash.com/illustrations/a-smiley-face-with-a-hat-on-top-of-it-vlGp55XDVow";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Profile {
    username: String,
    bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn show_profile(profile: &Profile) -> Vec<String> {
    let bio = match non_empty(&profile.bio) {
        Some(bio) => format!("Bio: {bio}"),
        None => "Bio: No information available!".to_string(),
    };
    let avatar = non_empty(&profile.avatar_url).unwrap_or(FALLBACK_AVATAR);

    vec![
        format!("Username: {}", profile.username),
        bio,
        format!("Avatar URL: {avatar}"),
    ]
}

const USER_PROFILES: &str = r#"[
    {
        "username": "nilashis37",
        "bio": "Hello, I am Nilashis",
        "avatarUrl": "https://nilashis.in/gallery/"
    },
    {
        "username": "john123",
        "bio": null
    }
]"#;

fn main() -> Result<(), Box<dyn Error>> {
    case_studies::bootstrap("Case study 8: profiles");

    let user_profiles: Vec<Profile> = serde_json::from_str(USER_PROFILES)?;
    tracing::debug!(count = user_profiles.len(), "profiles loaded");

    for profile in &user_profiles {
        for line in show_profile(profile) {
            println!("{line}");
        }
    }

    Ok(())
}
