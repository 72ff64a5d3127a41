use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::players::model::{Player, Profession, Race};

pub const DEFAULT_PAGE_NUMBER: usize = 0;
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    Id,
    Name,
    Experience,
    Birthday,
}

impl PlayerOrder {
    /// Stable ascending sort on the field matching the order.
    pub fn sort(self, players: &mut [Player]) {
        match self {
            PlayerOrder::Id => players.sort_by(|a, b| a.id.cmp(&b.id)),
            PlayerOrder::Name => players.sort_by(|a, b| a.name.cmp(&b.name)),
            PlayerOrder::Experience => players.sort_by(|a, b| a.experience.cmp(&b.experience)),
            PlayerOrder::Birthday => players.sort_by(|a, b| a.birthday.cmp(&b.birthday)),
        }
    }
}

// Query parameters received to list or count players.
// The count ignores the paging and order parameters.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GetPlayersQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,  // epoch milliseconds
    pub before: Option<i64>, // epoch milliseconds
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub banned: Option<bool>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
    pub order: Option<PlayerOrder>,
}

impl GetPlayersQuery {
    /// Criteria supplied by the caller. An empty name or title means no filtering on it.
    pub fn filter(&self) -> PlayerFilter {
        PlayerFilter {
            name: self.name.clone().filter(|name| !name.is_empty()),
            title: self.title.clone().filter(|title| !title.is_empty()),
            race: self.race,
            profession: self.profession,
            after: self.after,
            before: self.before,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
            banned: self.banned,
        }
    }

    pub fn page(&self) -> Result<Page> {
        let number = non_negative(self.page_number, DEFAULT_PAGE_NUMBER, "pageNumber")?;
        let size = non_negative(self.page_size, DEFAULT_PAGE_SIZE, "pageSize")?;

        Ok(Page { number, size })
    }
}

fn non_negative(value: Option<i32>, default: usize, param: &str) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(value) => usize::try_from(value).map_err(|_| AppError::BadRequest {
            msg: format!("{param} cannot be negative, received {value}"),
        }),
    }
}

/// Criteria a player must satisfy to be listed. A criterion left to None is not applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub banned: Option<bool>,
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name {
            if !contains_ignore_case(&player.name, name) {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !contains_ignore_case(&player.title, title) {
                return false;
            }
        }

        // The birthday window excludes its lower bound and includes its upper bound.
        let birthday = player.birthday.timestamp_millis();
        if self.after.is_some_and(|after| birthday <= after) {
            return false;
        }
        if self.before.is_some_and(|before| birthday > before) {
            return false;
        }

        if self.min_experience.is_some_and(|min| player.experience < min)
            || self.max_experience.is_some_and(|max| player.experience > max)
        {
            return false;
        }
        if self.min_level.is_some_and(|min| player.level < min)
            || self.max_level.is_some_and(|max| player.level > max)
        {
            return false;
        }

        self.race.map_or(true, |race| player.race == race)
            && self.profession.map_or(true, |profession| player.profession == profession)
            && self.banned.map_or(true, |banned| player.banned == banned)
    }

    /// Keep the players matching every criterion, in their original order.
    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        players.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn contains_ignore_case(value: &str, pattern: &str) -> bool {
    value.to_lowercase().contains(&pattern.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    /// Players of the page, empty when the page is past the end.
    pub fn slice(&self, players: Vec<Player>) -> Vec<Player> {
        let from = self.number.saturating_mul(self.size);
        if from >= players.len() {
            return Vec::new();
        }
        let to = from.saturating_add(self.size).min(players.len());

        players.into_iter().skip(from).take(to - from).collect()
    }
}
