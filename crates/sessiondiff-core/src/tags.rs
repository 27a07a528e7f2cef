//! Tag numbers of the trading session list message.

pub const MSG_TYPE: &str = "35";
pub const MARKET_SEGMENT_ID: &str = "1300";
pub const PRODUCT_COMPLEX: &str = "1227";
pub const SECURITY_GROUP: &str = "1151";
pub const NO_DATES: &str = "580";
pub const TRADE_DATE: &str = "75";
pub const NO_TRADING_SESSIONS: &str = "386";
pub const TRADING_SESSION_ID: &str = "336";
pub const TRADING_SESSION_TIME: &str = "341";
/// Optional; present only on Pre-Open sessions.
pub const TRADING_SESSION_INTERRUPT: &str = "625";

/// Message type value observed on every line of a session list file.
pub const SESSION_LIST_MSG_TYPE: &str = "BJ";
