//! Reaction panel state machine
//!
//! One panel per post view. Each axis (like, bookmark) moves
//! `Idle -> Pending(intent) -> Idle`, and a pending axis refuses new work.

mod reaction_panel;

pub use reaction_panel::{
    AxisState, BeginRejection, ReactionAxis, ReactionIntent, ReactionPanel, ReactionViewState,
};
