//! Cache category definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::fs::naming::encode_cache_path;

/// Virtual cache folder recognised by the game's asset cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheCategory {
    /// MediaTracker images (default).
    #[default]
    Images,
    /// MediaTracker sounds.
    Sounds,
    /// Challenge music.
    Music,
    /// Stadium mods.
    Mods,
    /// Advertisement skins.
    #[serde(alias = "advertisement")]
    Advert,
}

impl CacheCategory {
    /// Every category, in display order.
    pub const ALL: [CacheCategory; 5] = [
        CacheCategory::Images,
        CacheCategory::Sounds,
        CacheCategory::Music,
        CacheCategory::Mods,
        CacheCategory::Advert,
    ];

    /// Backslash-separated virtual path, with trailing separator.
    pub fn raw_path(&self) -> &'static str {
        match self {
            CacheCategory::Images => r"Skins\MediaTracker\Images\",
            CacheCategory::Sounds => r"Skins\MediaTracker\Sounds\",
            CacheCategory::Music => r"Skins\ChallengeMusics\",
            CacheCategory::Mods => r"Skins\Stadium\Mod\",
            CacheCategory::Advert => r"Skins\Any\Advertisement\",
        }
    }

    /// URL-encoded form of [`raw_path`](Self::raw_path).
    pub fn encoded_path(&self) -> String {
        encode_cache_path(self.raw_path())
    }

    /// Find the category whose encoded path starts `name`, returning it
    /// with the prefix length.
    pub fn from_encoded_prefix(name: &str) -> Option<(CacheCategory, usize)> {
        Self::ALL.iter().find_map(|category| {
            let encoded = category.encoded_path();
            if name
                .get(..encoded.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&encoded))
            {
                Some((*category, encoded.len()))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheCategory::Images => write!(f, "images"),
            CacheCategory::Sounds => write!(f, "sounds"),
            CacheCategory::Music => write!(f, "music"),
            CacheCategory::Mods => write!(f, "mods"),
            CacheCategory::Advert => write!(f, "advert"),
        }
    }
}

impl FromStr for CacheCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "images" => Ok(CacheCategory::Images),
            "sounds" => Ok(CacheCategory::Sounds),
            "music" => Ok(CacheCategory::Music),
            "mods" => Ok(CacheCategory::Mods),
            "advert" | "advertisement" => Ok(CacheCategory::Advert),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_raw_paths() {
        assert_eq!(CacheCategory::Music.raw_path(), "Skins\\ChallengeMusics\\");
        assert_eq!(
            CacheCategory::Advert.raw_path(),
            "Skins\\Any\\Advertisement\\"
        );
    }

    #[test]
    fn test_encoded_paths_are_distinct() {
        let encoded: HashSet<String> = CacheCategory::ALL
            .iter()
            .map(|c| c.encoded_path())
            .collect();
        assert_eq!(encoded.len(), CacheCategory::ALL.len());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Images".parse::<CacheCategory>().unwrap(),
            CacheCategory::Images
        );
        assert_eq!(
            "advertisement".parse::<CacheCategory>().unwrap(),
            CacheCategory::Advert
        );
        assert!(matches!(
            "textures".parse::<CacheCategory>(),
            Err(Error::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for category in CacheCategory::ALL {
            assert_eq!(
                category.to_string().parse::<CacheCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_from_encoded_prefix() {
        let (category, len) =
            CacheCategory::from_encoded_prefix("Skins%5cStadium%5cMod%5cfoo.dds").unwrap();
        assert_eq!(category, CacheCategory::Mods);
        assert_eq!(len, "Skins%5cStadium%5cMod%5c".len());
        assert!(CacheCategory::from_encoded_prefix("Textures%5cfoo.dds").is_none());
    }
}
