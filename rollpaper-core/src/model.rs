//! Rows exchanged with the backend and the presets offered by the composer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a note as issued by the comments API.
pub type NoteId = i64;

/// Identifier of a club. Kept as a string because it arrives from the URL.
pub type ClubId = String;

/// Accepts ids serialized either as JSON strings or integers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    #[serde(deserialize_with = "id_string")]
    pub id: ClubId,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "user_id", default)]
    pub owner_id: Option<String>,
}

/// Insert payload for the `Clubs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClub {
    pub title: String,
    pub thumbnail: String,
    #[serde(rename = "user_id")]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default, deserialize_with = "id_string")]
    pub club_id: ClubId,
    pub nickname: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "Note::default_color")]
    pub color: String,
    pub content: String,
}

impl Note {
    fn default_color() -> String {
        NoteColor::default().as_str().to_string()
    }

    /// CSS background for the card, falling back to white for unknown values.
    #[must_use]
    pub fn background(&self) -> &'static str {
        NoteColor::parse(&self.color).unwrap_or_default().css()
    }
}

/// Insert payload for a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub club_id: ClubId,
    pub nickname: String,
    pub category: String,
    pub color: String,
    pub content: String,
}

/// The signed-in identity, combining the session with the `Users` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub nickname: String,
    pub profile_img: Option<String>,
}

/// A row of the `Users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub nickname: String,
    #[serde(default)]
    pub profile_img: Option<String>,
}

impl UserProfile {
    /// Merge the stored row with the session account into the app user.
    ///
    /// The session's email wins; the row's is used when the provider has none.
    #[must_use]
    pub fn into_user(self, session_email: Option<&str>) -> User {
        User {
            email: session_email
                .map(str::to_string)
                .or(self.email)
                .unwrap_or_default(),
            id: self.id,
            nickname: self.nickname,
            profile_img: self.profile_img,
        }
    }
}

/// Insert payload for the `Users` table, written once by nickname onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub id: String,
    pub email: Option<String>,
    pub nickname: String,
    pub profile_img: String,
}

/// The identity-provider account behind a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "응원글")]
    Cheer,
    #[serde(rename = "축하글")]
    Congrats,
    #[serde(rename = "감사글")]
    Thanks,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Cheer, Self::Congrats, Self::Thanks];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cheer => "응원글",
            Self::Congrats => "축하글",
            Self::Thanks => "감사글",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    White,
    Yellow,
    Pink,
    Blue,
    Green,
}

impl NoteColor {
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Yellow,
        Self::Pink,
        Self::Blue,
        Self::Green,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::Yellow => "#FFF5B7",
            Self::Pink => "#FFD6E0",
            Self::Blue => "#D6ECFF",
            Self::Green => "#DDF5D5",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn club_reads_owner_from_user_id_column() {
        let club: Club = serde_json::from_str(
            r#"{"id":"7","title":"졸업","thumbnail":null,"user_id":"u-1"}"#,
        )
        .unwrap();
        assert_eq!(club.owner_id.as_deref(), Some("u-1"));
        assert!(club.thumbnail.is_none());
    }

    #[test]
    fn numeric_ids_are_read_as_strings() {
        let club: Club = serde_json::from_str(r#"{"id":12,"title":"t"}"#).unwrap();
        assert_eq!(club.id, "12");
        let note: Note = serde_json::from_str(
            r#"{"id":1,"club_id":12,"nickname":"n","content":"c"}"#,
        )
        .unwrap();
        assert_eq!(note.club_id, "12");
    }

    #[test]
    fn note_tolerates_missing_presentation_fields() {
        let note: Note =
            serde_json::from_str(r#"{"id":3,"nickname":"민지","content":"축하해"}"#).unwrap();
        assert_eq!(note.color, "white");
        assert_eq!(note.background(), "#FFFFFF");
        assert!(note.category.is_empty());
    }

    #[test]
    fn unknown_color_renders_white() {
        let note = Note {
            id: 1,
            club_id: "1".into(),
            nickname: "a".into(),
            category: "응원글".into(),
            color: "#123456".into(),
            content: "hi".into(),
        };
        assert_eq!(note.background(), NoteColor::White.css());
    }

    #[test]
    fn category_labels_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            assert_eq!(Category::parse(category.label()), Some(category));
        }
        assert_eq!(Category::default(), Category::Cheer);
    }

    #[test]
    fn color_parse_is_case_insensitive() {
        assert_eq!(NoteColor::parse(" Pink "), Some(NoteColor::Pink));
        assert_eq!(NoteColor::parse("purple"), None);
    }
}
