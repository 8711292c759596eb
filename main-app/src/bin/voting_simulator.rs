// Copyright 2026 The VoteSim authors.
// This file is part of VoteSim.
// VoteSim is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// VoteSim is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with VoteSim.  If not, see <https://www.gnu.org/licenses/>.



use clap::Parser;
use std::path::PathBuf;
use std::fs::File;
use anyhow::anyhow;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use votesim::random_util::make_rng;
use votesim::voting_method::{MethodDetails, VotingMethod};
use main_app::region::Region;
use main_app::report::SimulationReport;
use main_app::scenario::Scenario;

#[derive(Parser)]
#[command(version = "0.1", name="voting_simulator")]
/// Simulate elections under a variety of voting systems, with voters in groups
/// that share an ordering of the parties.
struct Opts {
    /// Seed for the random number generator, making the run reproducible.
    #[arg(long)]
    seed : Option<u64>,

    /// The total number of voters.
    #[arg(long,default_value_t=100000)]
    voters : usize,

    /// The number of districts to divide the voters into.
    #[arg(long,default_value_t=1)]
    districts : usize,

    /// The number of seats in each district, for methods that elect more than one candidate.
    #[arg(long,default_value_t=5)]
    seats : usize,

    /// The number of candidates each party stands.
    #[arg(long,default_value_t=3)]
    candidates_per_party : usize,

    /// Use every ordering of the parties as a voter group, instead of the named presets.
    #[arg(long)]
    all_patterns : bool,

    /// Choose candidates within a party, and parties within a window of preferences, at random.
    #[arg(long)]
    randomize : bool,

    /// The voting methods to simulate. May be given more than once. Defaults to all of them.
    /// Use --list-methods to see them.
    #[arg(long)]
    method : Vec<VotingMethod>,

    /// Print the supported voting methods and exit.
    #[arg(long)]
    list_methods : bool,

    /// A JSON file describing the parties, candidates and voter groups.
    #[arg(long)]
    scenario : Option<PathBuf>,

    /// An optional file to write the results to, as JSON.
    #[arg(long)]
    json : Option<PathBuf>,

    /// Log the progress of each count.
    #[arg(long)]
    verbose : bool,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();

    let filter = if opt.verbose { EnvFilter::new("debug") } else { EnvFilter::try_from_default_env().unwrap_or_else(|_|EnvFilter::new("info")) };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if opt.list_methods {
        for details in MethodDetails::list() { println!("{:<20}{}",details.name,details.description); }
        return Ok(());
    }

    let scenario = match &opt.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let metadata = scenario.metadata(opt.candidates_per_party);
    let groups = scenario.voter_groups(&metadata,opt.all_patterns)?;
    let voters = scenario.voters.unwrap_or(opt.voters);
    let num_districts = scenario.districts.unwrap_or(opt.districts);
    if num_districts==0 { return Err(anyhow!("Need at least one district")); }
    let methods = if opt.method.is_empty() { VotingMethod::ALL.to_vec() } else { opt.method.clone() };

    let mut rng = make_rng(opt.seed);
    info!("{} candidates, {} voter groups",metadata.num_candidates(),groups.len());

    println!("..:: VOTING SYSTEM SIMULATOR ::..\n");
    let region = Region::generate("Region",voters,num_districts,&groups,&mut rng)?;
    if num_districts==1 {
        println!("{}\n",region.districts[0].summary(&metadata));
    } else {
        println!("{}\n",region);
    }

    let mut results = vec![];
    for method in methods {
        let seats = if method.is_multi_seat() { opt.seats } else { 1 };
        match region.simulate(&metadata,method,seats,opt.randomize,&mut rng) {
            Ok(result) => {
                if num_districts==1 {
                    for r in &result.results { println!("{}\n",r.summary(&metadata)); }
                } else {
                    println!("{}\n",result.summary(&metadata));
                }
                results.push(result);
            }
            Err(e) => warn!("Could not simulate {} : {}",method,e),
        }
    }

    if let Some(json) = &opt.json {
        if let Some(parent) = json.parent() { std::fs::create_dir_all(parent)? }
        let report = SimulationReport{ seed: opt.seed, seats: opt.seats, randomize: opt.randomize, metadata, region, results };
        serde_json::to_writer_pretty(File::create(json)?,&report)?;
        info!("Wrote {}",json.display());
    }

    Ok(())
}
