//! Range picker CLI application.
//!
//! # Usage
//! ```ignore
//! rangecal                                        // Current month
//! rangecal 3 2024                                 // March 2024
//! rangecal --click 2024-03-04 --click 2024-03-08  // Pick a range
//! rangecal --shortcut last7days --confirm         // Last 7 days, then OK
//! ```

use rangecal::args::{Args, RunContext};
use rangecal::error::PickerError;
use rangecal::formatter::print_picker;
use rangecal::picker::DateRangePicker;
use rangecal::types::{FinalizedRange, PickerEvent};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("rangecal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PickerError> {
    let ctx = RunContext::new(args)?;
    let mut picker = DateRangePicker::new(ctx.config.clone(), ctx.today);

    // View first: navigation never touches the selection
    picker.show(ctx.cursor);
    picker.advance_month(ctx.advance);
    if let Some(year) = ctx.select_year {
        picker.toggle_year_choice();
        picker.select_year(year);
    }
    if ctx.show_years {
        picker.toggle_year_choice();
    }

    // The host keeps the last reported range, like a display box would
    let mut reported: Option<FinalizedRange> = None;
    let mut record = |event: PickerEvent| match event {
        PickerEvent::RangeChanged(range) => {
            tracing::info!(range = %range, weekends = ?range.weekend_strings(), "range reported");
            reported = Some(range);
        }
        PickerEvent::Confirmed => tracing::info!("selection confirmed"),
    };

    if let Some(kind) = ctx.shortcut {
        record(picker.apply_shortcut(kind)?);
    }
    for &date in &ctx.clicks {
        if let Some(event) = picker.click(date) {
            record(event);
        }
    }
    if ctx.confirm {
        record(picker.confirm());
    }

    print_picker(&picker, reported.as_ref(), ctx.color);
    if ctx.confirm {
        println!("Confirmed");
    }

    Ok(())
}
