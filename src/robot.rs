//! Robot domain: name resolution, token rows, relative ages, and the listing command.

pub mod age;
pub mod commands;
pub mod resolve;
pub mod tokens;

pub use commands::{RobotTokenService, TokenListRequest, TokenListing, TokenSink};
pub use resolve::resolve_robot;
pub use tokens::{build_rows, TokenRow, TOKEN_TABLE_HEADER};
