#![allow(dead_code)]

use propkit::chrono::{DateTime, Utc};
use propkit::{ByteString, Entity};

#[derive(Entity, Debug, Default)]
pub struct User {
    #[datastore("name")]
    pub name: String,
    #[datastore("email")]
    pub email: String,
    #[datastore("admin")]
    pub is_admin: bool,
    #[datastore("logins")]
    pub login_count: i64,
    #[datastore("score,noindex")]
    pub score: f64,
    #[datastore("created")]
    pub created: DateTime<Utc>,
    #[datastore("avatar")]
    pub avatar: Vec<u8>,
    #[datastore("token")]
    pub token: ByteString,
    #[datastore("aliases")]
    pub aliases: Vec<String>,

    pub(crate) session: Option<String>,
}

#[derive(Entity, Debug, Default)]
#[datastore(kind = "Proj")]
pub struct Project {
    #[datastore("title")]
    pub title: String,
    #[datastore("owner")]
    pub owner: String,
    #[datastore("labels,noindex")]
    pub labels: Vec<String>,
    #[datastore("attachments")]
    pub attachments: Vec<Vec<u8>>,
}
