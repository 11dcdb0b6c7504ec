//! Host-queried overrides. Before running one of its own routines the host asks the table for a
//! replacement; `None` means "run the stock routine".

use {
	crate::config::{JojaConfig, FALLBACK_BUTTON_PRICE},
	std::collections::HashMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
	/// args: `[button]`
	PriceFromButtonNumber,
	/// args: `[response, money]`
	BuyMovieTheater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
	Bought { remaining: i32 },
	/// Not enough money.
	Declined,
	/// The player answered anything but "yes".
	Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Price(i32),
	Purchase(Purchase),
}

pub type Handler = Box<dyn Fn(&JojaConfig, &[i32]) -> Option<Outcome>>;

#[derive(Default)]
pub struct OverrideTable {
	handlers: HashMap<Event, Handler>,
}

impl OverrideTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Table with the price and movie theater overrides installed.
	pub fn withModOverrides() -> Self {
		let mut table = Self::new();
		table.register(Event::PriceFromButtonNumber, |joja, args| match *args {
			[button] => Some(Outcome::Price(priceFromButtonNumber(joja, button))),
			_ => None,
		});
		table.register(Event::BuyMovieTheater, |joja, args| match *args {
			[response, money] => Some(Outcome::Purchase(buyMovieTheater(joja, response, money))),
			_ => None,
		});
		table
	}

	pub fn register(
		&mut self,
		event: Event,
		handler: impl Fn(&JojaConfig, &[i32]) -> Option<Outcome> + 'static,
	) -> Option<Handler> {
		self.handlers.insert(event, Box::new(handler))
	}

	/// Runs the override for `event`, if any. A handler that cannot make sense of `args` also
	/// yields `None`, handing control back to the stock routine.
	pub fn dispatch(&self, event: Event, joja: &JojaConfig, args: &[i32]) -> Option<Outcome> {
		let outcome = self.handlers.get(&event)?(joja, args);
		if outcome.is_none() {
			log::error!("override for {event:?} rejected args {args:?}, running stock logic");
		}
		outcome
	}
}

pub fn priceFromButtonNumber(joja: &JojaConfig, button: i32) -> i32 {
	joja.buttonPrice(button).unwrap_or_else(|| {
		log::warn!("unrecognised button number {button}");
		FALLBACK_BUTTON_PRICE
	})
}

pub fn buyMovieTheater(joja: &JojaConfig, response: i32, money: i32) -> Purchase {
	match response {
		0 if money >= joja.movieTheaterCost => Purchase::Bought { remaining: money - joja.movieTheaterCost },
		0 => Purchase::Declined,
		_ => Purchase::Cancelled,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn button_prices_come_from_config() {
		let joja = JojaConfig { bridgeCost: 7, ..Default::default() };
		assert_eq!(priceFromButtonNumber(&joja, 2), 7);
		assert_eq!(priceFromButtonNumber(&joja, 9), FALLBACK_BUTTON_PRICE);
	}

	#[test]
	fn movie_theater_purchase() {
		let joja = JojaConfig { movieTheaterCost: 1_000, ..Default::default() };
		assert_eq!(buyMovieTheater(&joja, 0, 1_500), Purchase::Bought { remaining: 500 });
		assert_eq!(buyMovieTheater(&joja, 0, 999), Purchase::Declined);
		assert_eq!(buyMovieTheater(&joja, 1, 1_500), Purchase::Cancelled);
	}

	#[test]
	fn dispatch_only_runs_registered_overrides() {
		let (joja, empty, table) = (JojaConfig::default(), OverrideTable::new(), OverrideTable::withModOverrides());
		assert_eq!(empty.dispatch(Event::PriceFromButtonNumber, &joja, &[0]), None);
		assert_eq!(table.dispatch(Event::PriceFromButtonNumber, &joja, &[0]), Some(Outcome::Price(40_000)));
		assert_eq!(table.dispatch(Event::BuyMovieTheater, &joja, &[0]), None);
	}

	#[test]
	fn register_replaces_previous_handler() {
		let mut table = OverrideTable::withModOverrides();
		assert!(table.register(Event::PriceFromButtonNumber, |_, _| Some(Outcome::Price(1))).is_some());
		assert_eq!(
			table.dispatch(Event::PriceFromButtonNumber, &JojaConfig::default(), &[3]),
			Some(Outcome::Price(1))
		);
	}
}
