use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    /// Any composition or transport failure. The transport layer is treated as
    /// a single failure domain; the cause is carried as text for the server log
    /// and never shown to the user.
    #[error("mail dispatch failed: {0}")]
    Dispatch(String),

    #[error("invalid mail configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MailerError>;
