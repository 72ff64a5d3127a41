use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::players::level::{calc_level, calc_next_level};

pub const MAX_NAME_LENGTH: usize = 12;
pub const MAX_TITLE_LENGTH: usize = 30;
pub const MAX_EXPERIENCE: i32 = 10_000_000;
pub const MIN_BIRTHDAY_YEAR: i32 = 2000;
pub const MAX_BIRTHDAY_YEAR: i32 = 3000;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

// The player record as stored and sent publicly.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Option<i64>, // Assigned by the storage on the first save.
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl Player {
    /// Recompute the level and the experience missing for the next one.
    pub fn refresh_progression(&mut self) {
        self.level = calc_level(self.experience);
        self.until_next_level = calc_next_level(self.level, self.experience);
    }

    /// Apply every field of the request that is individually acceptable, skipping the others.
    /// Returns true when at least one field was applied, the progression is then refreshed.
    pub fn apply_update(&mut self, req: &PlayerRequest) -> bool {
        let mut updated = false;

        if let Some(name) = req.name.as_deref().filter(|n| is_filled(n, MAX_NAME_LENGTH)) {
            self.name = name.to_string();
            updated = true;
        }
        if let Some(title) = req.title.as_deref().filter(|t| is_filled(t, MAX_TITLE_LENGTH)) {
            self.title = title.to_string();
            updated = true;
        }
        if let Some(race) = req.race {
            self.race = race;
            updated = true;
        }
        if let Some(profession) = req.profession {
            self.profession = profession;
            updated = true;
        }
        if let Some(experience) = req.experience {
            self.experience = experience;
            updated = true;
        }
        if let Some(birthday) = req.birthday {
            self.birthday = birthday;
            updated = true;
        }
        if let Some(banned) = req.banned {
            self.banned = banned;
            updated = true;
        }

        if updated {
            self.refresh_progression();
        }
        updated
    }
}

fn is_filled(value: &str, max_length: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_length
}

// payload to create or update a player, every field may be missing.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
    pub level: Option<i32>,
    pub until_next_level: Option<i32>,
}

impl PlayerRequest {
    /// True when the request does not carry a single field.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.title.is_none()
            && self.race.is_none()
            && self.profession.is_none()
            && self.birthday.is_none()
            && self.banned.is_none()
            && self.experience.is_none()
            && self.level.is_none()
            && self.until_next_level.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Full validation of a candidate player against the current time `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.name.as_deref() {
            Some(name) if is_filled(name, MAX_NAME_LENGTH) => {}
            _ => return false,
        }
        match self.title.as_deref() {
            Some(title) if title.chars().count() <= MAX_TITLE_LENGTH => {}
            _ => return false,
        }
        if self.race.is_none() || self.profession.is_none() {
            return false;
        }

        let Some(birthday) = self.birthday else {
            return false;
        };
        if birthday.timestamp_millis() < 0 || birthday >= now {
            return false;
        }
        let year = birthday.with_timezone(&Local).year();
        if !(MIN_BIRTHDAY_YEAR..=MAX_BIRTHDAY_YEAR).contains(&year) {
            return false;
        }

        matches!(self.experience, Some(experience) if (0..=MAX_EXPERIENCE).contains(&experience))
    }

    /// Fill every missing editable field with the value currently stored.
    /// The id, the progression and the banned flag are left as received.
    pub fn fill_from(&mut self, player: &Player) {
        if self.name.is_none() {
            self.name = Some(player.name.clone());
        }
        if self.title.is_none() {
            self.title = Some(player.title.clone());
        }
        if self.race.is_none() {
            self.race = Some(player.race);
        }
        if self.profession.is_none() {
            self.profession = Some(player.profession);
        }
        if self.birthday.is_none() {
            self.birthday = Some(player.birthday);
        }
        if self.experience.is_none() {
            self.experience = Some(player.experience);
        }
    }

    /// Build a new player out of a validated request.
    /// Returns None when one of the mandatory fields is missing.
    pub fn to_new_player(&self) -> Option<Player> {
        let mut player = Player {
            id: None,
            name: self.name.clone()?,
            title: self.title.clone()?,
            race: self.race?,
            profession: self.profession?,
            birthday: self.birthday?,
            banned: self.banned.unwrap_or(false),
            experience: self.experience?,
            level: 0,
            until_next_level: 0,
        };
        player.refresh_progression();
        Some(player)
    }
}
