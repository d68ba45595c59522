//! View subdomain: the lifecycle of one comparison screen.
//!
//! - [`state::ViewState`]: what the results area currently represents
//! - [`ticket::RequestTicket`]: sequence number identifying one submission

pub mod state;
pub mod ticket;
