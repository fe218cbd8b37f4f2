use crate::common::context::Context;
use crate::entities::beatmaps::Beatmap;
use crate::entities::scores::{Score, ScoreWithBeatmap};
use crate::entities::stats::{LeaderboardRow, Stats};
use crate::entities::users::{Credentials, User};
use crate::models::modes::Mode;
use crate::models::users::RANKED_PRIVILEGE_THRESHOLD;
use crate::repositories::avatars::{Avatar, AvatarsRepository};
use crate::repositories::scores::ScoresRepository;
use crate::repositories::stats::StatsRepository;
use crate::repositories::users::UsersRepository;
use async_trait::async_trait;
use chrono::DateTime;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub user: User,
    pub pw_bcrypt: String,
}

/// In-memory stand-in for the relational store, mirroring the SQL the MySQL
/// repositories issue. Rows keep insertion order, which stands in for the
/// storage default order.
#[derive(Default)]
pub struct MemoryDb {
    pub users: Mutex<Vec<UserRow>>,
    pub stats: Mutex<Vec<Stats>>,
    pub scores: Mutex<Vec<Score>>,
    pub maps: Mutex<Vec<Beatmap>>,
    pub fail: Mutex<bool>,
}

impl MemoryDb {
    fn check(&self) -> sqlx::Result<()> {
        match *self.fail.lock().unwrap() {
            true => Err(sqlx::Error::PoolTimedOut),
            false => Ok(()),
        }
    }

    pub fn password_hash(&self, user_id: i32) -> String {
        let users = self.users.lock().unwrap();
        let row = users.iter().find(|row| row.user.id == user_id).unwrap();
        row.pw_bcrypt.clone()
    }
}

#[derive(Default)]
pub struct MemoryAvatars {
    pub files: Mutex<HashMap<(i32, String), Vec<u8>>>,
}

#[derive(Default)]
pub struct MemoryContext {
    pub db: MemoryDb,
    pub avatars: MemoryAvatars,
}

impl Context for MemoryContext {
    type Db = MemoryDb;
    type Avatars = MemoryAvatars;

    fn db(&self) -> &MemoryDb {
        &self.db
    }

    fn avatars(&self) -> &MemoryAvatars {
        &self.avatars
    }
}

impl MemoryContext {
    pub fn add_user(&self, id: i32, name: &str, privileges: i32, pw_bcrypt: &str) {
        let user = User {
            id,
            name: name.to_string(),
            safe_name: crate::common::names::safe_name(name),
            country: "xx".to_string(),
            privileges,
            creation_time: 1_700_000_000,
            latest_activity: 1_700_000_000,
        };
        self.db.users.lock().unwrap().push(UserRow {
            user,
            pw_bcrypt: pw_bcrypt.to_string(),
        });
    }

    pub fn add_stats(&self, id: i32, mode: Mode, pp: u32) {
        self.db.stats.lock().unwrap().push(Stats {
            id,
            mode: mode.as_i8(),
            tscore: pp as u64 * 10_000,
            rscore: pp as u64 * 5_000,
            pp,
            plays: 100,
            playtime: 3_600,
            acc: 98.5,
            max_combo: 1_234,
        });
    }

    pub fn add_map(&self, id: i32, md5: &str) {
        self.db.maps.lock().unwrap().push(Beatmap {
            id,
            set_id: id * 10,
            md5: md5.to_string(),
            artist: "Artist".to_string(),
            title: format!("Map {id}"),
            version: "Insane".to_string(),
            creator: "Mapper".to_string(),
            status: 2,
        });
    }

    pub fn add_score(&self, id: u64, user_id: i32, mode: Mode, status: i8, pp: f32, map_md5: &str) {
        let play_time = DateTime::from_timestamp(1_700_000_000 + id as i64, 0)
            .unwrap()
            .naive_utc();
        self.db.scores.lock().unwrap().push(Score {
            id,
            userid: user_id,
            mode: mode.as_i8(),
            status,
            score: 1_000_000,
            pp,
            acc: 99.0,
            max_combo: 500,
            mods: 0,
            grade: "S".to_string(),
            play_time,
            map_md5: map_md5.to_string(),
        });
    }
}

#[async_trait]
impl UsersRepository for MemoryDb {
    async fn fetch_user(&self, user_id: i32) -> sqlx::Result<User> {
        self.check()?;
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|row| row.user.id == user_id)
            .map(|row| row.user.clone())
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn fetch_credentials(&self, user_id: i32) -> sqlx::Result<Credentials> {
        self.check()?;
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|row| row.user.id == user_id)
            .map(|row| Credentials {
                id: row.user.id,
                pw_bcrypt: row.pw_bcrypt.clone(),
            })
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn fetch_credentials_by_safe_name(&self, safe_name: &str) -> sqlx::Result<Credentials> {
        self.check()?;
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|row| row.user.safe_name == safe_name)
            .map(|row| Credentials {
                id: row.user.id,
                pw_bcrypt: row.pw_bcrypt.clone(),
            })
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update_password_hash(&self, user_id: i32, pw_bcrypt: &str) -> sqlx::Result<()> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let row = users
            .iter_mut()
            .find(|row| row.user.id == user_id)
            .ok_or(sqlx::Error::RowNotFound)?;
        row.pw_bcrypt = pw_bcrypt.to_string();
        Ok(())
    }
}

#[async_trait]
impl StatsRepository for MemoryDb {
    async fn fetch_stats(&self, user_id: i32, mode: Mode) -> sqlx::Result<Option<Stats>> {
        self.check()?;
        let stats = self.stats.lock().unwrap();
        Ok(stats
            .iter()
            .find(|s| s.id == user_id && s.mode == mode.as_i8())
            .cloned())
    }

    async fn fetch_leaderboard(&self, mode: Mode, limit: u32) -> sqlx::Result<Vec<LeaderboardRow>> {
        self.check()?;
        let stats = self.stats.lock().unwrap();
        let users = self.users.lock().unwrap();
        let mut rows: Vec<LeaderboardRow> = stats
            .iter()
            .filter(|s| s.mode == mode.as_i8())
            .filter_map(|s| {
                let user = &users.iter().find(|row| row.user.id == s.id)?.user;
                (user.privileges > RANKED_PRIVILEGE_THRESHOLD).then(|| LeaderboardRow {
                    id: user.id,
                    name: user.name.clone(),
                    country: user.country.clone(),
                    privileges: user.privileges,
                    stats: s.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.stats.pp.cmp(&a.stats.pp));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

#[async_trait]
impl ScoresRepository for MemoryDb {
    async fn fetch_best_scores(
        &self,
        user_id: i32,
        mode: Mode,
        limit: u32,
    ) -> sqlx::Result<Vec<ScoreWithBeatmap>> {
        self.check()?;
        let scores = self.scores.lock().unwrap();
        let maps = self.maps.lock().unwrap();
        let mut rows: Vec<ScoreWithBeatmap> = scores
            .iter()
            .filter(|s| s.userid == user_id && s.mode == mode.as_i8() && s.status == 2)
            .filter_map(|s| {
                let beatmap = maps.iter().find(|m| m.md5 == s.map_md5)?;
                Some(ScoreWithBeatmap {
                    score: s.clone(),
                    beatmap: beatmap.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.score.pp.total_cmp(&a.score.pp));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

#[async_trait]
impl AvatarsRepository for MemoryAvatars {
    async fn fetch(&self, user_id: i32) -> std::io::Result<Option<Avatar>> {
        let files = self.files.lock().unwrap();
        for extension in crate::repositories::avatars::AVATAR_EXTENSIONS {
            if let Some(data) = files.get(&(user_id, extension.to_string())) {
                return Ok(Some(Avatar {
                    extension,
                    data: data.clone(),
                }));
            }
        }
        Ok(None)
    }

    async fn store(&self, user_id: i32, extension: &'static str, data: &[u8]) -> std::io::Result<()> {
        let mut files = self.files.lock().unwrap();
        files.insert((user_id, extension.to_string()), data.to_vec());
        Ok(())
    }

    async fn delete_other_extensions(&self, user_id: i32, keep: &str) -> std::io::Result<()> {
        let mut files = self.files.lock().unwrap();
        files.retain(|(id, extension), _| *id != user_id || extension == keep);
        Ok(())
    }
}
