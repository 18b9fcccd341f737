//! Rewrite proxy-node share links against preferred CDN addresses.
//!
//! Given a batch of vmess/vless/trojan share links and a list of replacement
//! addresses, every link is expanded once per address. The node's original
//! address is kept as host/SNI metadata so the connection still terminates
//! correctly behind the new address.

pub mod cli;
pub mod generate;
pub mod link;
pub mod provider;
pub mod rewrite;
mod uri;
mod vmess;
