use thiserror::Error;

use crate::state::submission::ContactField;

/// Problems found while checking the compiled-in site content.
#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("duplicate {list} id: {id}")]
    DuplicateId { list: &'static str, id: &'static str },

    #[error("skill {skill} has level {level}, expected 0-100")]
    LevelOutOfRange { skill: &'static str, level: u8 },

    #[error("invalid url for {owner}: {url} ({source})")]
    InvalidUrl {
        owner: &'static str,
        url: &'static str,
        source: url::ParseError,
    },

    #[error("url for {owner} must be http(s): {url}")]
    UnsupportedScheme { owner: &'static str, url: &'static str },
}

/// Why the contact form refused to start a submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("{0} is required")]
    MissingField(ContactField),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown colour mode: {0:?}")]
pub struct UnknownColorMode(pub String);
