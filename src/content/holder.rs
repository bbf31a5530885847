//! Content holder schema
//!
//! A content holder is the decoded representation of one module's
//! configuration file: where the module lives, how it is titled and iconed,
//! and which sub-modules it nests. Decoding is field-tolerant: a missing or
//! malformed field takes its documented default and never invalidates the
//! record's other fields.

use serde::{Deserialize, Serialize};

use crate::config::lenient::{self, not_set, NOT_SET};
use crate::config::schema::default_true;

/// Kind of icon a holder refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IconType {
    /// Named entry in the application's asset catalog.
    #[default]
    #[serde(rename = "asset")]
    Asset,

    #[serde(rename = ".png")]
    Png,

    #[serde(rename = ".jpg")]
    Jpg,

    #[serde(rename = ".jpeg")]
    Jpeg,

    /// Glyph code in the FontAwesome icon font.
    #[serde(rename = "FontAwesome")]
    FontAwesome,
}

impl IconType {
    /// The string representation as written in content resources.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Asset => "asset",
            IconType::Png => ".png",
            IconType::Jpg => ".jpg",
            IconType::Jpeg => ".jpeg",
            IconType::FontAwesome => "FontAwesome",
        }
    }
}

/// One module's decoded configuration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentHolder {
    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub bundle_name: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub storyboard_name: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub identifier: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub title: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub icon: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub icon_type: IconType,

    /// Internal holders resolve against the application's own resources
    /// rather than a named bundle
    #[serde(default = "default_true", deserialize_with = "lenient::or_true")]
    pub is_internal: bool,

    /// Sort key for the registry's ordered collection
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub priority: i32,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sub_holders: Vec<ContentHolder>,
}

impl ContentHolder {
    /// The fully-defaulted record substituted when a module's resource
    /// cannot be located at all. Distinguished from an empty-but-present
    /// resource by its negative priority.
    pub fn placeholder() -> Self {
        Self {
            priority: -1,
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.priority < 0 && self.identifier == NOT_SET
    }

    /// Icon resource name with the file extension applied for the raster
    /// icon types. Asset and FontAwesome icons are referenced by bare name
    /// or glyph code.
    pub fn icon_file_name(&self) -> String {
        match self.icon_type {
            IconType::Png | IconType::Jpg | IconType::Jpeg => {
                format!("{}{}", self.icon, self.icon_type.as_str())
            }
            IconType::Asset | IconType::FontAwesome => self.icon.clone(),
        }
    }
}

impl Default for ContentHolder {
    fn default() -> Self {
        Self {
            bundle_name: not_set(),
            storyboard_name: not_set(),
            identifier: not_set(),
            title: not_set(),
            icon: not_set(),
            icon_type: IconType::default(),
            is_internal: true,
            priority: 0,
            sub_holders: Vec::new(),
        }
    }
}

impl std::fmt::Display for ContentHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] priority {} ({} sub-holders)",
            self.title,
            self.identifier,
            self.priority,
            self.sub_holders.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_priority_defaults_to_zero() {
        let json = r#"{"identifier": "fighter", "title": "Fighter"}"#;
        let holder: ContentHolder = serde_json::from_str(json).unwrap();
        assert_eq!(holder.priority, 0);
        assert_eq!(holder.identifier, "fighter");
    }

    #[test]
    fn test_unparseable_icon_type_defaults_without_losing_siblings() {
        let json = r#"{
            "identifier": "fighter",
            "title": "Fighter",
            "icon": "sword",
            "iconType": "bitmap",
            "priority": 3
        }"#;
        let holder: ContentHolder = serde_json::from_str(json).unwrap();
        assert_eq!(holder.icon_type, IconType::Asset);
        assert_eq!(holder.icon, "sword");
        assert_eq!(holder.title, "Fighter");
        assert_eq!(holder.priority, 3);
    }

    #[test]
    fn test_icon_type_wire_values() {
        for (wire, expected) in [
            ("\"asset\"", IconType::Asset),
            ("\".png\"", IconType::Png),
            ("\".jpg\"", IconType::Jpg),
            ("\".jpeg\"", IconType::Jpeg),
            ("\"FontAwesome\"", IconType::FontAwesome),
        ] {
            let parsed: IconType = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_icon_file_name() {
        let mut holder = ContentHolder {
            icon: "sword".to_string(),
            icon_type: IconType::Png,
            ..ContentHolder::default()
        };
        assert_eq!(holder.icon_file_name(), "sword.png");

        holder.icon_type = IconType::Asset;
        assert_eq!(holder.icon_file_name(), "sword");

        holder.icon_type = IconType::FontAwesome;
        holder.icon = "\u{f0e7}".to_string();
        assert_eq!(holder.icon_file_name(), "\u{f0e7}");
    }

    #[test]
    fn test_placeholder() {
        let placeholder = ContentHolder::placeholder();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.priority, -1);
        assert!(placeholder.is_internal);
        assert!(!ContentHolder::default().is_placeholder());
    }

    #[test]
    fn test_tree_round_trip() {
        let json = r#"{
            "bundleName": "Fighter",
            "storyboardName": "FighterMain",
            "identifier": "fighter",
            "title": "Fighter",
            "icon": "sword",
            "iconType": ".png",
            "isInternal": false,
            "priority": 2,
            "subHolders": [
                {
                    "identifier": "fighter.loadout",
                    "title": "Loadout",
                    "icon": "gear",
                    "iconType": "asset",
                    "priority": 1,
                    "subHolders": [
                        {"identifier": "fighter.loadout.weapons", "title": "Weapons"}
                    ]
                }
            ]
        }"#;
        let holder: ContentHolder = serde_json::from_str(json).unwrap();

        let encoded = serde_json::to_string(&holder).unwrap();
        let decoded: ContentHolder = serde_json::from_str(&encoded).unwrap();

        assert_eq!(holder, decoded);
        assert_eq!(decoded.sub_holders.len(), 1);
        assert_eq!(decoded.sub_holders[0].sub_holders[0].title, "Weapons");
    }
}
