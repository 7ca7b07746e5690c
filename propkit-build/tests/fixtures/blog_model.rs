use chrono::{DateTime, Utc};
use propkit::{ByteString, Entity};

#[derive(Entity, Debug, Default, Clone, PartialEq)]
pub struct Post {
    #[datastore("title")]
    pub title: String,
    #[datastore("tags,noindex")]
    pub tags: Vec<String>,
}

#[derive(Entity, Debug, Default, Clone, PartialEq)]
#[datastore(kind = "UserAccount")]
pub struct Account {
    #[datastore("login")]
    pub username: String,
    #[datastore("admin")]
    pub is_admin: bool,
    #[datastore("logins")]
    pub login_count: i64,
    #[datastore("balance,noindex")]
    pub balance: f64,
    #[datastore("created")]
    pub created: DateTime<Utc>,
    #[datastore("avatar")]
    pub avatar: Vec<u8>,
    #[datastore(" fingerprint ")]
    pub fingerprint: ByteString,
    #[datastore("keys")]
    pub keys: Vec<Vec<u8>>,
    #[datastore("emails")]
    pub emails: Vec<String>,

    pub(crate) cache: String,
}
