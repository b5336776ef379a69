// main.rs
//
// linkcams <path.csv> <left.stl> <right.stl> [job.json]
//
// Without a job file the reference star job parameters are used.

use anyhow::{Context, bail};
use linkcams::cams::{CamJob, create_cams};
use std::{env, fs};
use tracing::info;

fn main() -> anyhow::Result<()> {
    linkcams::init_logging()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (input, left, right, job_file) = match args.as_slice() {
        [input, left, right] => (input, left, right, None),
        [input, left, right, job] => (input, left, right, Some(job)),
        _ => bail!("usage: linkcams <path.csv> <left.stl> <right.stl> [job.json]"),
    };

    let job = match job_file {
        Some(job_file) => {
            let text = fs::read_to_string(job_file)
                .with_context(|| format!("reading job file {job_file}"))?;
            serde_json::from_str::<CamJob>(&text)
                .with_context(|| format!("parsing job file {job_file}"))?
        },
        None => CamJob::default(),
    };
    info!(?job, "starting cam job");

    let cams = create_cams(input, left, right, &job)
        .with_context(|| format!("building cams for {input}"))?;
    info!(
        left_points = cams.left.points.len(),
        right_points = cams.right.points.len(),
        "done"
    );
    Ok(())
}
