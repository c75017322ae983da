use soroban_sdk::Env;

use crate::events;
use crate::types::Auction;

/// Flip the paused flag on the owner's authority and return the new value.
pub fn toggle_pause(env: &Env, auction: &mut Auction) -> bool {
    auction.owner.require_auth();
    auction.paused = !auction.paused;
    events::emit_pause_toggled(env, auction.owner.clone(), auction.paused);
    auction.paused
}
