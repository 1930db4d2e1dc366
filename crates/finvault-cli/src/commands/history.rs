use rand::rngs::StdRng;
use rand::SeedableRng;

use finvault_core::score::{synthesize, HistoryRequest, HistoryVariant};

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::helpers::parse_date_or_today;
use crate::output::{history_json, history_summary, history_table, Terminal};

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let variant = if args.short {
        HistoryVariant::Short
    } else {
        config.history.variant
    };
    let mut request = HistoryRequest::new(args.score, variant);
    if let Some(months) = args.months.or(config.history.months) {
        request = request.with_months(months);
    }
    let as_of = parse_date_or_today(args.as_of.as_deref())?;

    let points = match args.seed {
        Some(seed) => synthesize(request, as_of, &mut StdRng::seed_from_u64(seed))?,
        None => synthesize(request, as_of, &mut rand::thread_rng())?,
    };

    if args.json {
        println!("{}", history_json(&points)?);
        return Ok(());
    }

    println!("{}", history_table(Terminal::detect(), &points));
    if !ctx.quiet() {
        if let Some(summary) = history_summary(&points) {
            println!("{}", summary);
        }
    }
    Ok(())
}
