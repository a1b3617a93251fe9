use cdnctl_core::{Profile, ProfileSet};

pub(crate) fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        return "*".repeat(count.max(4));
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}

pub(crate) fn format_profile(profile: &Profile, show_secret: bool) -> String {
    let secret = if show_secret {
        profile.access_key_secret.clone()
    } else {
        mask_secret(&profile.access_key_secret)
    };
    format!(
        "Profile Name: {}\nAccess Key: {}\nAccess Key Secret: {}\n",
        profile.name, profile.access_key, secret
    )
}

pub(crate) fn format_profile_set(set: &ProfileSet, show_secrets: bool) -> String {
    if set.is_empty() {
        return "No profiles found. Add one with 'cdnctl config add'.\n".to_string();
    }
    let mut out = format!(
        "Default Profile: {}\n\nAvailable CDN Profiles:\n",
        set.effective_default().unwrap_or_default()
    );
    for profile in &set.profiles {
        let marker = if set.is_default(&profile.name) {
            " (default)"
        } else {
            ""
        };
        let secret = if show_secrets {
            profile.access_key_secret.clone()
        } else {
            mask_secret(&profile.access_key_secret)
        };
        out.push_str(&format!(
            "Name: {}{marker}\n   AccessKey: {}\n   SecretKey: {secret}\n\n",
            profile.name, profile.access_key
        ));
    }
    out
}
