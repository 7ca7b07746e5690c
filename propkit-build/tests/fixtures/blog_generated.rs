//! Auto-generated by propkit-build. Do not edit manually.
//!
//! Regenerate with the `genmodel` binary or from a build script.
#![allow(
    dead_code,
    non_upper_case_globals,
    unused_imports,
    unused_mut,
    unused_variables,
    clippy::all
)]
use crate::model::*;
pub const PostKind: &str = "Post";
pub const Post_title: &str = "title =";
pub const Post_title_asc: &str = "title";
pub const Post_title_desc: &str = "-title";
pub const Post_title_gt: &str = "title >";
pub const Post_title_gte: &str = "title >=";
pub const Post_title_lt: &str = "title <";
pub const Post_title_lte: &str = "title <=";
pub const AccountKind: &str = "UserAccount";
pub const Account_username: &str = "login =";
pub const Account_username_asc: &str = "login";
pub const Account_username_desc: &str = "-login";
pub const Account_username_gt: &str = "login >";
pub const Account_username_gte: &str = "login >=";
pub const Account_username_lt: &str = "login <";
pub const Account_username_lte: &str = "login <=";
pub const Account_is_admin: &str = "admin =";
pub const Account_is_admin_asc: &str = "admin";
pub const Account_is_admin_desc: &str = "-admin";
pub const Account_is_admin_gt: &str = "admin >";
pub const Account_is_admin_gte: &str = "admin >=";
pub const Account_is_admin_lt: &str = "admin <";
pub const Account_is_admin_lte: &str = "admin <=";
pub const Account_login_count: &str = "logins =";
pub const Account_login_count_asc: &str = "logins";
pub const Account_login_count_desc: &str = "-logins";
pub const Account_login_count_gt: &str = "logins >";
pub const Account_login_count_gte: &str = "logins >=";
pub const Account_login_count_lt: &str = "logins <";
pub const Account_login_count_lte: &str = "logins <=";
pub const Account_created: &str = "created =";
pub const Account_created_asc: &str = "created";
pub const Account_created_desc: &str = "-created";
pub const Account_created_gt: &str = "created >";
pub const Account_created_gte: &str = "created >=";
pub const Account_created_lt: &str = "created <";
pub const Account_created_lte: &str = "created <=";
pub const Account_fingerprint: &str = "fingerprint =";
pub const Account_fingerprint_asc: &str = "fingerprint";
pub const Account_fingerprint_desc: &str = "-fingerprint";
pub const Account_fingerprint_gt: &str = "fingerprint >";
pub const Account_fingerprint_gte: &str = "fingerprint >=";
pub const Account_fingerprint_lt: &str = "fingerprint <";
pub const Account_fingerprint_lte: &str = "fingerprint <=";
pub const Account_emails: &str = "emails =";
pub const Account_emails_asc: &str = "emails";
pub const Account_emails_desc: &str = "-emails";
pub const Account_emails_gt: &str = "emails >";
pub const Account_emails_gte: &str = "emails >=";
pub const Account_emails_lt: &str = "emails <";
pub const Account_emails_lte: &str = "emails <=";
impl ::propkit::PropertyLoadSaver for Post {
    fn load(
        &mut self,
        props: ::std::vec::Vec<::propkit::Property>,
    ) -> ::propkit::PropertyResult<()> {
        self.tags = ::std::vec::Vec::new();
        for prop in props {
            let ::propkit::Property { name, value, .. } = prop;
            match name.as_str() {
                "tags" => {
                    let ::propkit::Value::String(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::element_mismatch("Post", "tags", "String"),
                        );
                    };
                    self.tags.push(val);
                }
                "title" => {
                    let ::propkit::Value::String(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Post", "title", "String"),
                        );
                    };
                    self.title = val;
                }
                _ => {}
            }
        }
        ::std::result::Result::Ok(())
    }
    fn save(&self) -> ::propkit::PropertyResult<::std::vec::Vec<::propkit::Property>> {
        let mut props = ::std::vec::Vec::new();
        for elem in &self.tags {
            props
                .push(
                    ::propkit::Property::new("tags", ::propkit::Value::String(elem.clone()))
                        .multiple()
                        .no_index(),
                );
        }
        props
            .push(
                ::propkit::Property::new(
                    "title",
                    ::propkit::Value::String(self.title.clone()),
                ),
            );
        ::std::result::Result::Ok(props)
    }
}
impl ::propkit::PropertyLoadSaver for Account {
    fn load(
        &mut self,
        props: ::std::vec::Vec<::propkit::Property>,
    ) -> ::propkit::PropertyResult<()> {
        self.emails = ::std::vec::Vec::new();
        self.keys = ::std::vec::Vec::new();
        for prop in props {
            let ::propkit::Property { name, value, .. } = prop;
            match name.as_str() {
                "admin" => {
                    let ::propkit::Value::Bool(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Account", "is_admin", "bool"),
                        );
                    };
                    self.is_admin = val;
                }
                "avatar" => {
                    let ::propkit::Value::Bytes(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Account", "avatar", "Vec<u8>"),
                        );
                    };
                    self.avatar = val;
                }
                "balance" => {
                    let ::propkit::Value::Float64(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Account", "balance", "f64"),
                        );
                    };
                    self.balance = val;
                }
                "created" => {
                    let ::propkit::Value::Timestamp(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch(
                                "Account",
                                "created",
                                "DateTime<Utc>",
                            ),
                        );
                    };
                    self.created = val;
                }
                "emails" => {
                    let ::propkit::Value::String(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::element_mismatch(
                                "Account",
                                "emails",
                                "String",
                            ),
                        );
                    };
                    self.emails.push(val);
                }
                "fingerprint" => {
                    let ::propkit::Value::ByteString(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch(
                                "Account",
                                "fingerprint",
                                "ByteString",
                            ),
                        );
                    };
                    self.fingerprint = val;
                }
                "keys" => {
                    let ::propkit::Value::Bytes(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::element_mismatch(
                                "Account",
                                "keys",
                                "Vec<u8>",
                            ),
                        );
                    };
                    self.keys.push(val);
                }
                "login" => {
                    let ::propkit::Value::String(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Account", "username", "String"),
                        );
                    };
                    self.username = val;
                }
                "logins" => {
                    let ::propkit::Value::Int64(val) = value else {
                        return ::std::result::Result::Err(
                            ::propkit::PropertyError::mismatch("Account", "login_count", "i64"),
                        );
                    };
                    self.login_count = val;
                }
                _ => {}
            }
        }
        ::std::result::Result::Ok(())
    }
    fn save(&self) -> ::propkit::PropertyResult<::std::vec::Vec<::propkit::Property>> {
        let mut props = ::std::vec::Vec::new();
        props
            .push(
                ::propkit::Property::new(
                        "avatar",
                        ::propkit::Value::Bytes(self.avatar.clone()),
                    )
                    .no_index(),
            );
        props
            .push(
                ::propkit::Property::new("balance", ::propkit::Value::Float64(self.balance))
                    .no_index(),
            );
        props
            .push(
                ::propkit::Property::new(
                    "created",
                    ::propkit::Value::Timestamp(self.created),
                ),
            );
        for elem in &self.emails {
            props
                .push(
                    ::propkit::Property::new("emails", ::propkit::Value::String(elem.clone()))
                        .multiple(),
                );
        }
        props
            .push(
                ::propkit::Property::new(
                    "fingerprint",
                    ::propkit::Value::ByteString(self.fingerprint.clone()),
                ),
            );
        props
            .push(
                ::propkit::Property::new("admin", ::propkit::Value::Bool(self.is_admin)),
            );
        for elem in &self.keys {
            props
                .push(
                    ::propkit::Property::new("keys", ::propkit::Value::Bytes(elem.clone()))
                        .multiple()
                        .no_index(),
                );
        }
        props
            .push(
                ::propkit::Property::new(
                    "logins",
                    ::propkit::Value::Int64(self.login_count),
                ),
            );
        props
            .push(
                ::propkit::Property::new(
                    "login",
                    ::propkit::Value::String(self.username.clone()),
                ),
            );
        ::std::result::Result::Ok(props)
    }
}
