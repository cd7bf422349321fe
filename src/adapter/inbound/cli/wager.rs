//! Handler for `place-wager`.

use super::command::PlaceWagerArgs;
use super::output;
use crate::application::WagerService;
use crate::domain::WagerRequest;
use crate::error::Result;
use crate::port::outbound::LedgerStore;

pub fn place<L: LedgerStore>(wagers: &WagerService<L>, args: &PlaceWagerArgs) -> Result<()> {
    let request = WagerRequest::new(args.stake, args.legs.clone());
    let placed = wagers.place(args.player_id, &request)?;

    if output::is_json() {
        return output::json_output(&placed);
    }
    output::success(&format!(
        "placed {} leg(s) at stake {}",
        placed.legs.len(),
        placed.stake
    ));
    for leg in &placed.legs {
        output::field(&format!("{}:{}", leg.offer_id, leg.market), leg.price);
    }
    output::field("Balance", placed.balance_after);
    Ok(())
}
