use cdnctl_crypto::Credentials;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(rename = "accessKey", default)]
    pub access_key: String,
    #[serde(rename = "accessKeySecret", default)]
    pub access_key_secret: String,
}

impl Profile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        access_key: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_key: access_key.into(),
            access_key_secret: access_key_secret.into(),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.access_key, &self.access_key_secret)
    }
}

/// The persisted collection of profiles. `default_profile` is empty when no
/// default has been chosen; resolution then falls back to the first profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_profile: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: Vec<Profile>,
}

/// Outcome of removing a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub profile: Profile,
    pub was_default: bool,
    /// The reassigned default; `None` when the set became empty or the
    /// removed profile was not the default.
    pub new_default: Option<String>,
}

impl ProfileSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Name of the profile used when none is given: the stored default, or
    /// the first profile when no default is stored.
    #[must_use]
    pub fn effective_default(&self) -> Option<&str> {
        if !self.default_profile.is_empty() {
            return Some(&self.default_profile);
        }
        self.profiles.first().map(|profile| profile.name.as_str())
    }

    #[must_use]
    pub fn is_default(&self, name: &str) -> bool {
        self.effective_default() == Some(name)
    }

    /// Explicit name first, then the stored default, then the first profile.
    pub fn resolve(&self, name: &str) -> Result<&Profile> {
        if !name.is_empty() {
            return self
                .find(name)
                .ok_or_else(|| Error::NotFound(name.to_string()));
        }
        let Some(default_name) = self.effective_default() else {
            return Err(Error::NoProfiles);
        };
        self.find(default_name)
            .ok_or_else(|| Error::NotFound(default_name.to_string()))
    }

    /// Appends `profile`, returning whether it became the default.
    pub fn insert(&mut self, profile: Profile, make_default: bool) -> Result<bool> {
        validate(&profile)?;
        if self.contains(&profile.name) {
            return Err(Error::DuplicateName(profile.name));
        }
        let becomes_default = make_default || !self.contains(&self.default_profile);
        if becomes_default {
            self.default_profile = profile.name.clone();
        }
        self.profiles.push(profile);
        Ok(becomes_default)
    }

    pub fn remove(&mut self, name: &str) -> Result<Removal> {
        let index = self
            .profiles
            .iter()
            .position(|profile| profile.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let profile = self.profiles.remove(index);
        let was_default = self.default_profile == name;
        let mut new_default = None;
        if was_default {
            self.default_profile = self
                .profiles
                .first()
                .map(|profile| profile.name.clone())
                .unwrap_or_default();
            if !self.default_profile.is_empty() {
                new_default = Some(self.default_profile.clone());
            }
        }
        Ok(Removal {
            profile,
            was_default,
            new_default,
        })
    }

    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(Error::NotFound(name.to_string()));
        }
        self.default_profile = name.to_string();
        Ok(())
    }
}

fn validate(profile: &Profile) -> Result<()> {
    if profile.name.trim().is_empty() {
        return Err(Error::InvalidProfile("name is required".to_string()));
    }
    if profile.access_key.trim().is_empty() {
        return Err(Error::InvalidProfile("access key is required".to_string()));
    }
    if profile.access_key_secret.is_empty() {
        return Err(Error::InvalidProfile(
            "access key secret is required".to_string(),
        ));
    }
    Ok(())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
