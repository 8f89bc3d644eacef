//! Elm-style core
//!
//! Terminal events arrive as [`raw_msg::RawMsg`], the [`translator`] turns them
//! into [`msg::Msg`] for the current mode, [`update`] produces the next
//! [`state::AppState`] and the [`cmd::Cmd`]s that [`cmd_executor`] hands to the host.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
