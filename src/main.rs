mod dataset;
mod extractor;
mod logging;
mod opts;
mod prelude;
mod regression;
mod report;

pub use crate::prelude::Result;

fn main() -> Result {
    let opts = opts::parse();
    logging::init(opts.verbosity)?;

    let dataset = extractor::extract(&opts.path, &opts.x_column, &opts.y_column);
    if dataset.is_empty() {
        report::print_not_loaded();
        return Ok(());
    }

    let result = regression::fit(&dataset.x, &dataset.y)?;
    report::print_summary(&opts.path, &dataset, &result);
    Ok(())
}
