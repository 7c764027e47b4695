//! skillfolio browse - Interactive skill browser

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::tui::{BrowseTui, run_browse_tui};

use super::FilterArgs;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(ctx: &AppContext, args: &BrowseArgs) -> Result<()> {
    let state = args.filter.to_state(ctx)?;
    let app = BrowseTui::new(
        ctx.browser(state),
        ctx.portfolio.proficiency.clone(),
        ctx.portfolio.featured.clone(),
        ctx.icons(),
    );
    run_browse_tui(app)
}
