//! Logging backend which writes to stderr, so stdout stays free for image and table output.

use {
	chrono::Local,
	log::{Level, LevelFilter, Metadata, Record, SetLoggerError},
	std::io::{self, Write},
};

pub struct Logger;

impl Logger {
	fn levelName(level: Level) -> &'static str {
		match level {
			Level::Error => "error",
			Level::Warn => "warning",
			Level::Info => "info",
			Level::Debug | Level::Trace => "debug",
		}
	}

	pub fn commit(&self, record: &Record<'_>) {
		let module = record.module_path().and_then(|path| path.split("::").last()).unwrap_or("unknown");
		//      [date time] [module] [level] Text
		let _ = writeln!(
			io::stderr().lock(),
			"[{}] [{module}] [{}] {}",
			Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
			Self::levelName(record.level()),
			record.args(),
		);
	}
}

impl log::Log for Logger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record<'_>) {
		if self.enabled(record.metadata()) {
			self.commit(record);
		}
	}

	fn flush(&self) {
		let _ = io::stderr().flush();
	}
}

static LOGGER: Logger = Logger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
	log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// `-v` count to level: warnings by default, then info, debug, trace.
pub fn levelForVerbosity(verbosity: u64) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_levels() {
		assert_eq!(levelForVerbosity(0), LevelFilter::Warn);
		assert_eq!(levelForVerbosity(2), LevelFilter::Debug);
		assert_eq!(levelForVerbosity(9), LevelFilter::Trace);
	}
}
