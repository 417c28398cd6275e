//! Runs the opener against a scripted economy and prints what it would order.

#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;

use clap::Parser;
use drone_opener::{prelude::*, telemetry::LogTelemetry};

#[derive(Parser)]
#[clap(version, author)]
struct Args {
	/// Minerals mined per step
	#[clap(short, long, default_value = "4")]
	income: u32,
	/// Number of steps to simulate
	#[clap(short, long, default_value = "120")]
	steps: u32,
	/// Game loops per step
	#[clap(long, default_value = "8")]
	game_step: u32,
	/// Log every decision of the opener
	#[clap(short, long)]
	verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<(), fern::InitError> {
	let level = if verbose {
		log::LevelFilter::Debug
	} else {
		log::LevelFilter::Info
	};
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
		})
		.level(level)
		.chain(std::io::stdout())
		.apply()?;
	Ok(())
}

fn main_base() -> Base {
	let patches = (0..8).map(|i| {
		let x = 26.0 + i as f32;
		let y = if i % 2 == 0 { 39.0 } else { 40.5 };
		ResourcePatch::new(100 + i, Point2::new(x, y), 1800)
	});
	Base::new(Point2::new(30.0, 30.0))
		.with_townhall(1)
		.with_patches(patches)
		.with_mineral_line(Point2::new(30.0, 37.5))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();
	if args.game_step == 0 {
		return Err("game step must be X >= 1".into());
	}
	setup_logging(args.verbose)?;

	let mut opener = Opener::new(OpenerOptions::default())?.with_telemetry(LogTelemetry);
	opener.start(0);

	let bases = vec![main_base()];
	let mut minerals = 50;
	// Drones besides the returning one, supply used is one more
	let mut drones = 13;
	let mut extractor: Option<Structure> = None;

	for step in 1..=args.steps {
		let tick = step * args.game_step;
		minerals += args.income;

		let mut workers: Workers = (0..drones)
			.map(|i| {
				let x = 26.0 + (i % 8) as f32;
				let patch = 100 + (i % 8) as u64;
				Worker::new(10 + i as u64, Point2::new(x, 38.0))
					.with_order(AbilityId::HarvestGather, Target::Tag(patch))
			})
			.collect();
		// Somebody always walks back with cargo
		workers.push(
			Worker::new(9, Point2::new(30.0, 34.0))
				.with_buff(BuffId::CarryMineralFieldMinerals)
				.with_order(AbilityId::HarvestReturn, Target::None),
		);

		let obs = Observation {
			tick,
			counters: Some(MacroCounters::new(minerals, drones + 1, 14, 3)),
			workers,
			bases: bases.clone(),
			structures: extractor.iter().copied().collect(),
			unit_counts: hashmap! {
				UnitTypeId::Drone => drones + 1,
				UnitTypeId::Overlord => 1,
			}
			.into_iter()
			.collect(),
		};
		let report = opener.on_step(&obs);

		// Pretend the game does what intent and commands ask for
		if opener.intent().gas_requested && extractor.is_none() && minerals >= 25 {
			minerals -= 25;
			drones -= 1;
			extractor = Some(Structure::new(500, UnitTypeId::Extractor, 0.05));
		}
		let supply_used = drones + 1;
		if supply_used < 14 && supply_used < opener.intent().desired_unit(UnitTypeId::Drone) && minerals >= 50 {
			minerals -= 50;
			drones += 1;
		}
		for command in &report.commands {
			println!("{:>5}: {}", tick, command);
			if command.ability == AbilityId::CancelBuildInProgress && extractor.take().is_some() {
				minerals += 19;
				drones += 1;
			}
		}

		if opener.is_finished() {
			info!("Opener finished at game loop {} with {} minerals", tick, minerals);
			break;
		}
	}
	Ok(())
}
