use crate::reports;
use clap::Args;
use keytravel::api;
use keytravel::error::KtResult;
use keytravel::geometry::KeyboardDefinition;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// One character per marker, in marker order (`_` leaves a marker empty)
    #[arg(short = 'c', long)]
    pub characters: String,
}

pub fn run(args: ScoreArgs, def: &KeyboardDefinition, text: &str) -> KtResult<()> {
    let (layout, travel) = api::score_assignment(def, text, &args.characters)?;

    reports::print_layout_table("GIVEN", &layout);
    reports::print_travel_report(&travel);
    info!("Distance: {:.2}", travel.total());
    Ok(())
}
