use glam::Vec2;

/// Where a pointer-like event came from. Each source gets its own interaction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputSource {
	#[display("mouse")]
	Mouse,
	#[display("touch")]
	Touch,
}

impl InputSource {
	fn index(self) -> usize {
		match self {
			InputSource::Mouse => 0,
			InputSource::Touch => 1,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct ChainId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum ChainState {
	Idle,
	Drawing { id: ChainId, previous: Option<Vec2> },
}

/// Tracks one movement-observation chain per input source.
///
/// A chain is opened by `start`, closed by `end`, and replaced wholesale when `start` is called
/// again before the previous chain ended. Within a chain, samples are paired up: the first sample
/// only primes the chain and every later one yields the pair `(previous, current)`.
#[derive(Debug)]
pub struct Chains {
	states: [ChainState; 2],
	next_id: u64,
}

impl Default for Chains {
	fn default() -> Self {
		Self {
			states: [ChainState::Idle; 2],
			next_id: 0,
		}
	}
}

impl Chains {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn start(&mut self, source: InputSource) -> ChainId {
		let id = ChainId(self.next_id);
		self.next_id += 1;
		let state = &mut self.states[source.index()];
		if let ChainState::Drawing { id: stale, .. } = *state {
			tracing::debug!(%source, %stale, %id, "superseding live chain");
		}
		*state = ChainState::Drawing { id, previous: None };
		id
	}

	/// Feeds a sample into the live chain of `source`, if any, and returns the pair it completes.
	pub fn sample(&mut self, source: InputSource, position: Vec2) -> Option<(Vec2, Vec2)> {
		match &mut self.states[source.index()] {
			ChainState::Idle => None,
			ChainState::Drawing { previous, .. } => previous
				.replace(position)
				.map(|previous| (previous, position)),
		}
	}

	/// Closes the live chain of `source`. Returns the id of the chain that was closed.
	pub fn end(&mut self, source: InputSource) -> Option<ChainId> {
		match std::mem::replace(&mut self.states[source.index()], ChainState::Idle) {
			ChainState::Idle => None,
			ChainState::Drawing { id, .. } => Some(id),
		}
	}

	pub fn live(&self, source: InputSource) -> Option<ChainId> {
		match self.states[source.index()] {
			ChainState::Idle => None,
			ChainState::Drawing { id, .. } => Some(id),
		}
	}

	pub fn is_drawing(&self, source: InputSource) -> bool {
		self.live(source).is_some()
	}
}
